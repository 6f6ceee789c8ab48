//! Value comparison with the six relations the command table registers.

use std::cmp::Ordering;

use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

use super::str_of;

/// The comparison relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `=`
    Equal,
    /// `≠`
    NotEqual,
    /// `≤`
    LessThanEqual,
    /// `≥`
    GreaterThanEqual,
}

/// Compares two values under the given relation, yielding `0` or `1`.
///
/// Numbers compare numerically across int/float; texts lexicographically;
/// a number against text compares by the number's rendering; sequences
/// compare lexicographically after materialization.
pub fn compare(lhs: &Value, rhs: &Value, cmp: Comparison) -> crate::Result<Value> {
    match cmp {
        Comparison::Equal => Ok(Value::from(loose_eq(lhs, rhs))),
        Comparison::NotEqual => Ok(Value::from(!loose_eq(lhs, rhs))),
        _ => {
            let ord = order(lhs, rhs)?;
            let result = match cmp {
                Comparison::LessThan => ord == Ordering::Less,
                Comparison::GreaterThan => ord == Ordering::Greater,
                Comparison::LessThanEqual => ord != Ordering::Greater,
                Comparison::GreaterThanEqual => ord != Ordering::Less,
                Comparison::Equal | Comparison::NotEqual => unreachable!(),
            };
            Ok(Value::from(result))
        }
    }
}

/// Equality across the numeric tower: `1` equals `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn loose_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
        (Value::List(a), Value::List(b)) => {
            if a.is_lazy() || b.is_lazy() {
                return a == b;
            }
            let a = a.materialize();
            let b = b.materialize();
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Pair(a), Value::Pair(b)) => loose_eq(&a.0, &b.0) && loose_eq(&a.1, &b.1),
        _ => lhs == rhs,
    }
}

fn order(lhs: &Value, rhs: &Value) -> crate::Result<Ordering> {
    match (lhs, rhs) {
        (Value::List(a), Value::List(b)) => {
            let a = a.materialize();
            let b = b.materialize();
            for (x, y) in a.iter().zip(b.iter()) {
                match order(x, y)? {
                    Ordering::Equal => {}
                    other => return Ok(other),
                }
            }
            Ok(a.len().cmp(&b.len()))
        }
        (Value::Str(a), Value::Int(_) | Value::Float(_)) => Ok(a.as_ref().cmp(str_of(rhs).as_str())),
        (Value::Int(_) | Value::Float(_), Value::Str(b)) => Ok(str_of(lhs).as_str().cmp(b.as_ref())),
        _ => lhs
            .partial_cmp(rhs)
            .ok_or_else(|| Error::type_mismatch(lhs.value_type(), rhs.value_type())),
    }
}

/// The larger of two values under [`compare`] ordering.
pub fn max2(lhs: Value, rhs: Value) -> crate::Result<Value> {
    Ok(if order(&lhs, &rhs)? == Ordering::Less {
        rhs
    } else {
        lhs
    })
}

/// The smaller of two values under [`compare`] ordering.
pub fn min2(lhs: Value, rhs: Value) -> crate::Result<Value> {
    Ok(if order(&lhs, &rhs)? == Ordering::Greater {
        rhs
    } else {
        lhs
    })
}

/// Ordering between two values, for sorts.
pub(crate) fn order_for_sort(lhs: &Value, rhs: &Value) -> Ordering {
    order(lhs, rhs).unwrap_or(Ordering::Equal)
}

/// Strict structural equality after materialization (`⁼`).
pub fn strict_eq(lhs: &Value, rhs: &Value) -> crate::Result<Value> {
    match (lhs, rhs) {
        (Value::List(a), Value::List(b)) => {
            let a = a.materialize();
            let b = b.materialize();
            let eq = a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| matches!(strict_eq(x, y), Ok(Value::Int(1))));
            Ok(Value::from(eq))
        }
        _ => Ok(Value::from(loose_eq(lhs, rhs))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_numbers() {
        let lt = compare(&Value::Int(3), &Value::Int(4), Comparison::LessThan).unwrap();
        assert_eq!(lt, Value::Int(1));
        let ge = compare(&Value::Int(3), &Value::Float(3.0), Comparison::GreaterThanEqual).unwrap();
        assert_eq!(ge, Value::Int(1));
    }

    #[test]
    fn equal_across_numeric_tower() {
        assert_eq!(
            compare(&Value::Int(1), &Value::Float(1.0), Comparison::Equal).unwrap(),
            Value::Int(1)
        );
        assert_eq!(
            compare(&Value::Int(1), &Value::Int(2), Comparison::NotEqual).unwrap(),
            Value::Int(1)
        );
    }

    #[test]
    fn compare_texts() {
        let lt = compare(&Value::from("abc"), &Value::from("abd"), Comparison::LessThan).unwrap();
        assert_eq!(lt, Value::Int(1));
    }

    #[test]
    fn compare_lists_lexicographically() {
        let a = Value::from(vec![1i64, 2]);
        let b = Value::from(vec![1i64, 3]);
        assert_eq!(compare(&a, &b, Comparison::LessThan).unwrap(), Value::Int(1));
    }

    #[test]
    fn max_min_pairwise() {
        assert_eq!(max2(Value::Int(3), Value::Int(7)).unwrap(), Value::Int(7));
        assert_eq!(min2(Value::Int(3), Value::Int(7)).unwrap(), Value::Int(3));
    }

    #[test]
    fn incomparable_kinds_error() {
        let f = Value::list([]);
        assert!(compare(&Value::Int(1), &f, Comparison::LessThan).is_err());
    }

    #[test]
    fn strict_eq_materializes() {
        let a = Value::from(vec![1i64, 2]);
        let b = Value::list([Value::Int(1), Value::Float(2.0)]);
        assert_eq!(strict_eq(&a, &b).unwrap(), Value::Int(1));
    }
}
