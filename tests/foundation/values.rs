//! Integration tests for the value model.
//!
//! Tests Value variants, truthiness, equality, hashing, and the primitive
//! operations' polymorphism.

use sigil_foundation::ops;
use sigil_foundation::{Type, Value};

// =============================================================================
// Construction and truthiness
// =============================================================================

#[test]
fn value_kinds() {
    assert_eq!(Value::Int(1).value_type(), Type::Num);
    assert_eq!(Value::Float(1.5).value_type(), Type::Num);
    assert_eq!(Value::from("x").value_type(), Type::Str);
    assert_eq!(Value::list([]).value_type(), Type::List);
    assert_eq!(
        Value::pair(Value::Int(1), Value::Int(2)).value_type(),
        Type::Pair
    );
}

#[test]
fn falsy_values() {
    assert!(!Value::Int(0).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(!Value::list([]).is_truthy());
}

#[test]
fn truthy_values() {
    assert!(Value::Int(-1).is_truthy());
    assert!(Value::from("0").is_truthy());
    assert!(Value::list([Value::Int(0)]).is_truthy());
    assert!(Value::pair(Value::Int(0), Value::Int(0)).is_truthy());
}

// =============================================================================
// Arithmetic polymorphism
// =============================================================================

#[test]
fn add_is_polymorphic() {
    assert_eq!(
        ops::arith::add(Value::Int(1), Value::Int(2)).unwrap(),
        Value::Int(3)
    );
    assert_eq!(
        ops::arith::add(Value::from("a"), Value::from("b")).unwrap(),
        Value::from("ab")
    );
    assert_eq!(
        ops::arith::add(Value::from(vec![1i64, 2]), Value::Int(1)).unwrap(),
        Value::from(vec![2i64, 3])
    );
}

#[test]
fn mixed_numeric_promotes_to_float() {
    assert_eq!(
        ops::arith::add(Value::Int(1), Value::Float(0.5)).unwrap(),
        Value::Float(1.5)
    );
}

#[test]
fn type_errors_are_not_coerced() {
    let err = ops::arith::add(
        Value::Int(1),
        Value::Fn(sigil_foundation::SgFn::Native(sigil_foundation::NativeFn {
            name: "id",
            arity: 1,
            func: |args| Ok(args[0].clone()),
        })),
    )
    .unwrap_err();
    assert!(matches!(
        err.kind,
        sigil_foundation::ErrorKind::TypeMismatch { .. }
    ));
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn six_relations() {
    use ops::compare::{Comparison, compare};
    let one = Value::Int(1);
    let two = Value::Int(2);
    assert_eq!(compare(&one, &two, Comparison::LessThan).unwrap(), Value::Int(1));
    assert_eq!(compare(&two, &one, Comparison::GreaterThan).unwrap(), Value::Int(1));
    assert_eq!(compare(&one, &one, Comparison::Equal).unwrap(), Value::Int(1));
    assert_eq!(compare(&one, &two, Comparison::NotEqual).unwrap(), Value::Int(1));
    assert_eq!(compare(&one, &one, Comparison::LessThanEqual).unwrap(), Value::Int(1));
    assert_eq!(compare(&one, &one, Comparison::GreaterThanEqual).unwrap(), Value::Int(1));
}

// =============================================================================
// Property tests
// =============================================================================

mod proptests {
    use proptest::prelude::*;
    use sigil_foundation::Value;
    use sigil_foundation::ops;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_value(v: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    fn scalar_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i64>().prop_map(Value::Int),
            any::<f64>().prop_map(Value::Float),
            "[a-zA-Z0-9]{0,20}".prop_map(|s| Value::from(s.as_str())),
        ]
    }

    proptest! {
        #[test]
        fn eq_reflexivity(v in scalar_value()) {
            prop_assert_eq!(&v, &v);
        }

        #[test]
        fn eq_hash_consistency(v in scalar_value()) {
            let h1 = hash_value(&v);
            let h2 = hash_value(&v);
            prop_assert_eq!(h1, h2);
        }

        #[test]
        fn add_int_commutes(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let x = ops::arith::add(Value::Int(a), Value::Int(b)).unwrap();
            let y = ops::arith::add(Value::Int(b), Value::Int(a)).unwrap();
            prop_assert_eq!(x, y);
        }

        #[test]
        fn negate_is_involutive(a in any::<i64>()) {
            let twice = ops::arith::negate(ops::arith::negate(Value::Int(a)).unwrap()).unwrap();
            prop_assert_eq!(twice, Value::Int(a));
        }

        #[test]
        fn reverse_is_involutive(xs in proptest::collection::vec(any::<i64>(), 0..20)) {
            let v = Value::from(xs);
            let twice = ops::seq::reverse(&ops::seq::reverse(&v).unwrap()).unwrap();
            prop_assert_eq!(twice, v);
        }

        #[test]
        fn sorted_is_idempotent(xs in proptest::collection::vec(any::<i64>(), 0..20)) {
            let v = Value::from(xs);
            let once = ops::seq::sorted(&v).unwrap();
            let twice = ops::seq::sorted(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
