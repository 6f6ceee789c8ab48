//! Stack-structure commands: duplicate, swap, reverse, wrap, rotate.
//!
//! These manipulate the evaluation stack directly, so most are bespoke
//! templates rather than primitive invocations.

use sigil_foundation::{Result, Value, ops};

use crate::command::Outcome;
use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // $ swap: [a, b] -> [b, a]
    set.op("$", 2, |_, operands| {
        let (lhs, rhs) = operands.binary();
        Ok(Outcome::Many(vec![rhs, lhs]))
    })?;

    // : duplicate the top value
    set.op(":", 1, |_, operands| {
        let value = operands.unary();
        Ok(Outcome::Many(vec![value.clone(), value]))
    })?;

    // D triplicate the top value
    set.op("D", 1, |_, operands| {
        let value = operands.unary();
        Ok(Outcome::Many(vec![value.clone(), value.clone(), value]))
    })?;

    // Ȯ push a copy of the second value; on a short stack, read an input
    set.op("Ȯ", 0, |interp, _| {
        let depth = interp.env.stack.len();
        let value = if depth >= 2 {
            interp.env.stack[depth - 2].clone()
        } else {
            interp.env.next_input()
        };
        Ok(Outcome::One(value))
    })?;

    // ∇ rotate the top three: [a, b, c] -> [c, a, b]
    set.op("∇", 3, |_, operands| {
        let (a, b, c) = operands.ternary();
        Ok(Outcome::Many(vec![c, a, b]))
    })?;

    // ^ reverse the whole stack
    set.op("^", 0, |interp, _| {
        interp.env.stack.reverse();
        Ok(Outcome::Nothing)
    })?;

    // _ pop and discard
    set.op("_", 1, |_, _| Ok(Outcome::Nothing))?;

    // „ / ‟ rotate the whole stack left / right
    set.op("„", 0, |interp, _| {
        if !interp.env.stack.is_empty() {
            interp.env.stack.rotate_left(1);
        }
        Ok(Outcome::Nothing)
    })?;
    set.op("‟", 0, |interp, _| {
        if !interp.env.stack.is_empty() {
            interp.env.stack.rotate_right(1);
        }
        Ok(Outcome::Nothing)
    })?;

    // ! push the stack depth (without consuming anything)
    set.op("!", 0, |interp, _| {
        Ok(Outcome::One(Value::from(interp.env.stack.len())))
    })?;

    // W wrap the whole stack into one list
    set.op("W", 0, |interp, _| {
        let all = std::mem::take(&mut interp.env.stack);
        Ok(Outcome::One(Value::list(all)))
    })?;

    // Ṡ replace the whole stack with its sum
    set.op("Ṡ", 0, |interp, _| {
        let all = std::mem::take(&mut interp.env.stack);
        Ok(Outcome::One(ops::seq::summate(&Value::list(all))?))
    })?;

    // " wrap the top two into a list
    set.op("\"", 2, |_, operands| {
        let (lhs, rhs) = operands.binary();
        Ok(Outcome::One(Value::list([lhs, rhs])))
    })?;

    // w wrap the top value into a one-element list
    set.op("w", 1, |_, operands| {
        Ok(Outcome::One(Value::list([operands.unary()])))
    })?;

    // ÷ unpack a sequence onto the stack
    set.op("÷", 1, |_, operands| {
        Ok(Outcome::Many(ops::to_vec(&operands.unary())?))
    })?;

    // y uninterleave into the even- and odd-indexed halves
    set.op("y", 1, |_, operands| {
        let (evens, odds) = ops::seq::uninterleave(&operands.unary())?;
        Ok(Outcome::Many(vec![evens, odds]))
    })?;

    // ḣ split into head and rest
    set.op("ḣ", 1, |_, operands| {
        let value = operands.unary();
        let head = ops::seq::head(&value)?;
        let rest = ops::seq::rest(&value)?;
        Ok(Outcome::Many(vec![head, rest]))
    })?;

    // ṫ split into init and last
    set.op("ṫ", 1, |_, operands| {
        let value = operands.unary();
        let init = ops::seq::init(&value)?;
        let last = ops::seq::last(&value)?;
        Ok(Outcome::Many(vec![init, last]))
    })?;

    // Ḃ push the value and its reverse
    set.op("Ḃ", 1, |_, operands| {
        let value = operands.unary();
        let reversed = ops::seq::reverse(&value)?;
        Ok(Outcome::Many(vec![value, reversed]))
    })?;

    // Q halt the program cleanly
    set.op("Q", 0, |interp, _| {
        interp.env.halted = true;
        Ok(Outcome::Nothing)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interp::eval;
    use sigil_foundation::Value;

    #[test]
    fn swap_and_duplicate() {
        assert_eq!(eval("1 2$").unwrap(), vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(
            eval("1 2:").unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(2)]
        );
        assert_eq!(
            eval("7D").unwrap(),
            vec![Value::Int(7), Value::Int(7), Value::Int(7)]
        );
    }

    #[test]
    fn rotate_three() {
        assert_eq!(
            eval("1 2 3∇").unwrap(),
            vec![Value::Int(3), Value::Int(1), Value::Int(2)]
        );
    }

    #[test]
    fn reverse_and_rotate_stack() {
        assert_eq!(
            eval("1 2 3^").unwrap(),
            vec![Value::Int(3), Value::Int(2), Value::Int(1)]
        );
        assert_eq!(
            eval("1 2 3„").unwrap(),
            vec![Value::Int(2), Value::Int(3), Value::Int(1)]
        );
        assert_eq!(
            eval("1 2 3‟").unwrap(),
            vec![Value::Int(3), Value::Int(1), Value::Int(2)]
        );
    }

    #[test]
    fn stack_depth_and_wrap() {
        assert_eq!(
            eval("1 2!").unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(2)]
        );
        assert_eq!(
            eval("1 2 3W").unwrap(),
            vec![Value::from(vec![1i64, 2, 3])]
        );
        assert_eq!(eval("1 2 3Ṡ").unwrap(), vec![Value::Int(6)]);
    }

    #[test]
    fn pair_and_single_wrap() {
        assert_eq!(
            eval("1 2\"").unwrap(),
            vec![Value::from(vec![1i64, 2])]
        );
        assert_eq!(eval("5w").unwrap(), vec![Value::from(vec![5i64])]);
    }

    #[test]
    fn unpack_and_splits() {
        assert_eq!(
            eval("3ɾ÷").unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(
            eval("3ɾḣ").unwrap(),
            vec![Value::Int(1), Value::from(vec![2i64, 3])]
        );
        assert_eq!(
            eval("3ɾṫ").unwrap(),
            vec![Value::from(vec![1i64, 2]), Value::Int(3)]
        );
    }

    #[test]
    fn over_reads_second() {
        assert_eq!(
            eval("1 2Ȯ").unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(1)]
        );
    }

    #[test]
    fn discard() {
        assert_eq!(eval("1 2_").unwrap(), vec![Value::Int(1)]);
    }
}
