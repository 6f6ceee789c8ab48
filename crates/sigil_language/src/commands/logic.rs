//! Truthiness and predicate commands.

use sigil_foundation::{Result, Value, ops};

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    set.unary_ref("¬", |v| Ok(Value::from(!v.is_truthy())))?;

    // ∧ / ∨ follow short-circuit value semantics: the deciding operand is
    // the result. ⟑ / ⟇ are the same operations with the slots explicitly
    // swapped (the table's one sanctioned slot-order exception).
    set.binary("∧", |lhs, rhs| Ok(if lhs.is_truthy() { rhs } else { lhs }))?;
    set.binary("⟑", |lhs, rhs| Ok(if rhs.is_truthy() { lhs } else { rhs }))?;
    set.binary("∨", |lhs, rhs| Ok(if lhs.is_truthy() { lhs } else { rhs }))?;
    set.binary("⟇", |lhs, rhs| Ok(if rhs.is_truthy() { rhs } else { lhs }))?;

    set.unary_ref("A", |v| {
        Ok(Value::from(
            ops::to_vec(v)?.iter().all(Value::is_truthy),
        ))
    })?;
    set.unary_ref("a", |v| {
        Ok(Value::from(
            ops::to_vec(v)?.iter().any(Value::is_truthy),
        ))
    })?;
    set.unary_ref("≈", ops::seq::all_equal)?;

    // ḃ / ċ: nonzero and not-one predicates.
    set.unary_ref("ḃ", |v| {
        Ok(Value::from(!ops::compare::loose_eq(v, &Value::Int(0))))
    })?;
    set.unary_ref("ċ", |v| {
        Ok(Value::from(!ops::compare::loose_eq(v, &Value::Int(1))))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interp::eval;
    use sigil_foundation::Value;

    #[test]
    fn negation() {
        assert_eq!(eval("0¬").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("5¬").unwrap(), vec![Value::Int(0)]);
    }

    #[test]
    fn and_or_value_semantics() {
        assert_eq!(eval("2 3∧").unwrap(), vec![Value::Int(3)]);
        assert_eq!(eval("0 3∧").unwrap(), vec![Value::Int(0)]);
        assert_eq!(eval("2 3∨").unwrap(), vec![Value::Int(2)]);
        assert_eq!(eval("0 3∨").unwrap(), vec![Value::Int(3)]);
    }

    #[test]
    fn swapped_variants() {
        // ⟑ keys on the right-hand operand instead.
        assert_eq!(eval("2 0⟑").unwrap(), vec![Value::Int(0)]);
        assert_eq!(eval("2 3⟑").unwrap(), vec![Value::Int(2)]);
        assert_eq!(eval("2 3⟇").unwrap(), vec![Value::Int(3)]);
        assert_eq!(eval("2 0⟇").unwrap(), vec![Value::Int(2)]);
    }

    #[test]
    fn quantifiers() {
        assert_eq!(eval("3ɾA").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("3ʀa").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("2 2\"≈").unwrap(), vec![Value::Int(1)]);
    }

    #[test]
    fn nonzero_and_not_one() {
        assert_eq!(eval("5ḃ").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("0ḃ").unwrap(), vec![Value::Int(0)]);
        assert_eq!(eval("1ċ").unwrap(), vec![Value::Int(0)]);
        assert_eq!(eval("2ċ").unwrap(), vec![Value::Int(1)]);
    }
}
