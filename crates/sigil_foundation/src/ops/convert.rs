//! Conversions: radix, symbols, casts, and literal evaluation.

use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

use super::arith::vectorise1;
use super::{str_of, to_vec};

/// Casts a value to an integer: floats truncate, text parses, sequences map.
#[allow(clippy::cast_possible_truncation)]
pub fn to_int(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(to_int, v),
        Value::Int(n) => Ok(Value::Int(n)),
        Value::Float(f) => Ok(Value::Int(f.trunc() as i64)),
        Value::Str(ref s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .map(Value::Int)
                .or_else(|_| trimmed.parse::<f64>().map(|f| Value::Int(f.trunc() as i64)))
                .map_err(|_| Error::type_mismatch(Type::Num, Type::Str))
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Renders a value as text.
pub fn to_str(v: &Value) -> Value {
    Value::from(str_of(v))
}

/// Parses text in the given radix (2–36); digit sequences parse positionally.
pub fn parse_radix(v: &Value, radix: u32) -> crate::Result<Value> {
    match v {
        Value::Str(s) => i64::from_str_radix(s.trim(), radix)
            .map(Value::Int)
            .map_err(|_| Error::type_mismatch(Type::Num, Type::Str)),
        Value::Int(_) | Value::Float(_) => {
            // Digits of the number reinterpreted in the radix.
            parse_radix(&Value::from(str_of(v)), radix)
        }
        Value::List(_) => {
            let mut acc = 0i64;
            for digit in to_vec(v)? {
                let d = digit.expect_int()?;
                acc = acc
                    .checked_mul(i64::from(radix))
                    .and_then(|a| a.checked_add(d))
                    .ok_or_else(|| Error::internal("radix overflow"))?;
            }
            Ok(Value::Int(acc))
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Renders an integer in binary, elementwise over sequences.
pub fn to_binary(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(to_binary, v),
        _ => {
            let n = v.expect_int()?;
            if n < 0 {
                Ok(Value::from(format!("-{:b}", -n)))
            } else {
                Ok(Value::from(format!("{n:b}")))
            }
        }
    }
}

/// Symbol to code point, or code point to symbol, elementwise.
pub fn chr_ord(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(chr_ord, v),
        Value::Int(n) => {
            let c = u32::try_from(n)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::new(crate::ErrorKind::IndexOutOfBounds {
                    index: n,
                    length: 0,
                }))?;
            Ok(Value::from(c))
        }
        Value::Str(ref s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::from(c as i64)),
                // Multi-symbol text maps symbolwise.
                _ => Ok(Value::list(s.chars().map(|c| Value::from(c as i64)))),
            }
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Interprets `digits` positionally in the alphabet (custom-base decode).
///
/// The alphabet's length is the base; each element's index is its digit
/// value.
pub fn from_custom_base(digits: &Value, alphabet: &Value) -> crate::Result<Value> {
    let alpha = to_vec(alphabet)?;
    if alpha.is_empty() {
        return Err(Error::type_mismatch(Type::List, alphabet.value_type()));
    }
    let base = i64::try_from(alpha.len()).unwrap_or(i64::MAX);
    let items = to_vec(digits)?;
    let mut acc = 0i64;
    for item in items {
        let digit = alpha
            .iter()
            .position(|a| super::compare::loose_eq(a, &item))
            .ok_or_else(|| Error::type_mismatch(Type::Num, item.value_type()))?;
        acc = acc
            .checked_mul(base)
            .and_then(|a| a.checked_add(i64::try_from(digit).unwrap_or(0)))
            .ok_or_else(|| Error::internal("custom base overflow"))?;
    }
    Ok(Value::Int(acc))
}

/// Renders a number positionally in the alphabet (custom-base encode).
pub fn to_custom_base(number: &Value, alphabet: &Value) -> crate::Result<Value> {
    let alpha = to_vec(alphabet)?;
    if alpha.is_empty() {
        return Err(Error::type_mismatch(Type::List, alphabet.value_type()));
    }
    let base = i64::try_from(alpha.len()).unwrap_or(i64::MAX);
    let mut n = number.expect_int()?;
    let negative = n < 0;
    n = n.abs();
    let mut digits: Vec<Value> = Vec::new();
    if n == 0 {
        digits.push(alpha[0].clone());
    }
    while n > 0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let d = (n % base) as usize;
        digits.push(alpha[d].clone());
        n /= base;
    }
    digits.reverse();
    let all_text = digits.iter().all(|d| matches!(d, Value::Str(_)));
    let result = if all_text {
        let joined: String = digits.iter().filter_map(Value::as_str).collect();
        Value::from(if negative { format!("-{joined}") } else { joined })
    } else {
        Value::list(digits)
    };
    Ok(result)
}

/// Evaluates text as a literal: integers, floats, anything else unchanged.
pub fn eval_literal(v: Value) -> crate::Result<Value> {
    match &v {
        Value::Str(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                Ok(Value::Int(n))
            } else if let Ok(f) = trimmed.parse::<f64>() {
                Ok(Value::Float(f))
            } else {
                Ok(v)
            }
        }
        _ => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_casts() {
        assert_eq!(to_int(Value::Float(3.9)).unwrap(), Value::Int(3));
        assert_eq!(to_int(Value::from("42")).unwrap(), Value::Int(42));
        assert!(to_int(Value::from("x")).is_err());
    }

    #[test]
    fn radix_parsing() {
        assert_eq!(parse_radix(&Value::from("ff"), 16).unwrap(), Value::Int(255));
        assert_eq!(parse_radix(&Value::from("101"), 2).unwrap(), Value::Int(5));
        assert_eq!(parse_radix(&Value::Int(101), 2).unwrap(), Value::Int(5));
        assert_eq!(
            parse_radix(&Value::from(vec![1i64, 0, 1]), 2).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn binary_rendering() {
        assert_eq!(to_binary(Value::Int(5)).unwrap(), Value::from("101"));
        assert_eq!(to_binary(Value::Int(-2)).unwrap(), Value::from("-10"));
    }

    #[test]
    fn symbol_codes() {
        assert_eq!(chr_ord(Value::Int(97)).unwrap(), Value::from("a"));
        assert_eq!(chr_ord(Value::from("a")).unwrap(), Value::Int(97));
        assert_eq!(
            chr_ord(Value::from("ab")).unwrap(),
            Value::from(vec![97i64, 98])
        );
    }

    #[test]
    fn custom_bases() {
        let alphabet = Value::from("01");
        assert_eq!(
            to_custom_base(&Value::Int(5), &alphabet).unwrap(),
            Value::from("101")
        );
        assert_eq!(
            from_custom_base(&Value::from("101"), &alphabet).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn literal_eval() {
        assert_eq!(eval_literal(Value::from("7")).unwrap(), Value::Int(7));
        assert_eq!(eval_literal(Value::from("1.5")).unwrap(), Value::Float(1.5));
        assert_eq!(eval_literal(Value::from("xy")).unwrap(), Value::from("xy"));
    }
}
