//! Runtime commands: printing, inputs, the register, the global stack,
//! context resolution, and higher-order invocation.

use rand::Rng;
use sigil_foundation::{Error, Result, Value, ops};

use crate::command::Outcome;
use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // Printing. Output accumulates in the environment; the driver flushes.
    set.op(",", 1, |interp, operands| {
        let text = ops::str_of(&operands.unary());
        interp.env.print_line(&text);
        Ok(Outcome::Nothing)
    })?;
    set.op("₴", 1, |interp, operands| {
        let text = ops::str_of(&operands.unary());
        interp.env.print(&text);
        Ok(Outcome::Nothing)
    })?;
    set.op("…", 1, |interp, operands| {
        // Peek-print: the value stays on the stack.
        let value = operands.unary();
        interp.env.print_line(&ops::str_of(&value));
        Ok(Outcome::One(value))
    })?;
    set.op("¨,", 1, |interp, operands| {
        let text = ops::str_of(&operands.unary());
        interp.env.print(&text);
        interp.env.print(" ");
        Ok(Outcome::Nothing)
    })?;
    set.op("¨…", 1, |interp, operands| {
        let value = operands.unary();
        interp.env.print(&ops::str_of(&value));
        interp.env.print(" ");
        Ok(Outcome::One(value))
    })?;

    // Inputs.
    set.op("?", 0, |interp, _| Ok(Outcome::One(interp.env.next_input())))?;
    set.op("⁰", 0, |interp, _| {
        Ok(Outcome::One(interp.env.input_from_end(0)))
    })?;
    set.op("¹", 0, |interp, _| {
        Ok(Outcome::One(interp.env.input_from_end(1)))
    })?;
    set.op("□", 0, |interp, _| {
        Ok(Outcome::One(Value::list(interp.env.inputs().to_vec())))
    })?;

    // Register.
    set.op("£", 1, |interp, operands| {
        interp.env.register = operands.unary();
        Ok(Outcome::Nothing)
    })?;
    set.op("¥", 0, |interp, _| {
        Ok(Outcome::One(interp.env.register.clone()))
    })?;

    // Global stack.
    set.op("⅛", 1, |interp, operands| {
        let value = operands.unary();
        interp.env.global_stack.push(value);
        Ok(Outcome::Nothing)
    })?;
    set.op("¼", 0, |interp, _| {
        let value = interp
            .env
            .global_stack
            .pop()
            .ok_or_else(|| Error::underflow(1, 0))?;
        Ok(Outcome::One(value))
    })?;
    set.op("¾", 0, |interp, _| {
        Ok(Outcome::One(Value::list(interp.env.global_stack.clone())))
    })?;

    // Context.
    set.op("n", 0, |interp, _| {
        Ok(Outcome::One(interp.env.context_value()))
    })?;
    set.op("X", 0, |interp, _| {
        interp.env.ascend_context();
        Ok(Outcome::Nothing)
    })?;
    set.op("x", 0, |interp, _| {
        interp.recurse()?;
        Ok(Outcome::Nothing)
    })?;

    // Function invocation.
    set.op("†", 1, |interp, operands| {
        let function = operands.unary();
        let f = function.expect_fn()?.clone();
        interp.call_on_stack(&f)?;
        Ok(Outcome::Nothing)
    })?;

    // M / F / R / ṡ / z: the classic higher-order commands; the function
    // is the top operand.
    set.op("M", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(interp.invoke_value(&f, vec![item])?);
        }
        Ok(Outcome::One(Value::list(out)))
    })?;
    set.op("F", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut out = Vec::new();
        for item in items {
            if interp.invoke_value(&f, vec![item.clone()])?.is_truthy() {
                out.push(item);
            }
        }
        Ok(Outcome::One(Value::list(out)))
    })?;
    set.op("R", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut iter = items.into_iter();
        let Some(mut acc) = iter.next() else {
            return Ok(Outcome::One(Value::Int(0)));
        };
        for item in iter {
            acc = interp.invoke_value(&f, vec![acc, item])?;
        }
        Ok(Outcome::One(acc))
    })?;
    set.op("ṡ", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut keyed = Vec::with_capacity(items.len());
        for item in items {
            let key = interp.invoke_value(&f, vec![item.clone()])?;
            keyed.push((key, item));
        }
        keyed.sort_by(|(a, _), (b, _)| {
            a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(Outcome::One(Value::list(
            keyed.into_iter().map(|(_, item)| item),
        )))
    })?;
    set.op("z", 2, |interp, operands| {
        let (vector, function) = operands.binary();
        let f = function.expect_fn()?.clone();
        let items = ops::to_vec(&vector)?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let mapped = interp.invoke_value(&f, vec![item.clone()])?;
            out.push(Value::list([item, mapped]));
        }
        Ok(Outcome::One(Value::list(out)))
    })?;

    // ¨M: apply the function at the given indices only.
    set.op("¨M", 3, |interp, operands| {
        let (vector, indices, function) = operands.ternary();
        let f = function.expect_fn()?.clone();
        let mut items = ops::to_vec(&vector)?;
        let len = items.len();
        if len == 0 {
            return Ok(Outcome::One(Value::list(items)));
        }
        for idx in ops::to_vec(&indices)? {
            #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
            let pos = (idx.expect_int()?.rem_euclid(len as i64)) as usize;
            items[pos] = interp.invoke_value(&f, vec![items[pos].clone()])?;
        }
        Ok(Outcome::One(Value::list(items)))
    })?;

    // ℅: random choice. Nondeterministic by design; drawn from the
    // environment's seedable RNG.
    set.op("℅", 1, |interp, operands| {
        let items = ops::to_vec(&operands.unary())?;
        if items.is_empty() {
            return Err(Error::new(sigil_foundation::ErrorKind::IndexOutOfBounds {
                index: 0,
                length: 0,
            }));
        }
        let pick = interp.env.rng.gen_range(0..items.len());
        Ok(Outcome::One(items[pick].clone()))
    })?;

    Ok(())
}
