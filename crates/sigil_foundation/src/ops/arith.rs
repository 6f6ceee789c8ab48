//! Polymorphic arithmetic.
//!
//! Numeric arithmetic promotes int to float on mixed operands and falls back
//! to float when i64 arithmetic would overflow. The classic overloads apply:
//! `add` concatenates texts, `multiply` repeats text, `divide` chunks text.
//! Binary operations vectorize pairwise over sequences, broadcasting
//! scalars; unary ones map elementwise.

#![allow(clippy::cast_precision_loss)]

use crate::error::{Error, ErrorKind};
use crate::types::Type;
use crate::value::Value;

use super::str_of;

/// Applies a unary operation elementwise over sequences, directly otherwise.
pub fn vectorise1(f: fn(Value) -> crate::Result<Value>, v: Value) -> crate::Result<Value> {
    match v {
        Value::List(l) => {
            let mapped: crate::Result<Vec<Value>> =
                l.materialize().into_iter().map(|x| vectorise1(f, x)).collect();
            Ok(Value::list(mapped?))
        }
        other => f(other),
    }
}

/// Applies a binary operation pairwise over sequences, broadcasting scalars.
///
/// Two sequences zip to the shorter length.
pub fn vectorise2(
    f: fn(Value, Value) -> crate::Result<Value>,
    lhs: Value,
    rhs: Value,
) -> crate::Result<Value> {
    match (lhs, rhs) {
        (Value::List(a), Value::List(b)) => {
            let a = a.materialize();
            let b = b.materialize();
            let mapped: crate::Result<Vec<Value>> = a
                .into_iter()
                .zip(b)
                .map(|(x, y)| vectorise2(f, x, y))
                .collect();
            Ok(Value::list(mapped?))
        }
        (Value::List(a), b) => {
            let mapped: crate::Result<Vec<Value>> = a
                .materialize()
                .into_iter()
                .map(|x| vectorise2(f, x, b.clone()))
                .collect();
            Ok(Value::list(mapped?))
        }
        (a, Value::List(b)) => {
            let mapped: crate::Result<Vec<Value>> = b
                .materialize()
                .into_iter()
                .map(|y| vectorise2(f, a.clone(), y))
                .collect();
            Ok(Value::list(mapped?))
        }
        (a, b) => f(a, b),
    }
}

/// Adds two values. Texts concatenate; a number concatenates onto text.
pub fn add(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(add, lhs, rhs),
        (Value::Int(x), Value::Int(y)) => Ok(x
            .checked_add(*y)
            .map_or_else(|| Value::Float(*x as f64 + *y as f64), Value::Int)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 + y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x + *y as f64)),
        (Value::Str(x), Value::Str(y)) => Ok(Value::from(format!("{x}{y}"))),
        (Value::Str(x), Value::Int(_) | Value::Float(_)) => {
            Ok(Value::from(format!("{x}{}", str_of(&rhs))))
        }
        (Value::Int(_) | Value::Float(_), Value::Str(y)) => {
            Ok(Value::from(format!("{}{y}", str_of(&lhs))))
        }
        _ => Err(Error::type_mismatch(Type::Num, lhs.value_type())),
    }
}

/// Subtracts two values. For texts, removes every occurrence of `rhs`.
pub fn subtract(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(subtract, lhs, rhs),
        (Value::Int(x), Value::Int(y)) => Ok(x
            .checked_sub(*y)
            .map_or_else(|| Value::Float(*x as f64 - *y as f64), Value::Int)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x - y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 - y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x - *y as f64)),
        (Value::Str(x), Value::Str(y)) => Ok(Value::from(x.replace(&**y, ""))),
        _ => Err(Error::type_mismatch(Type::Num, lhs.value_type())),
    }
}

/// Multiplies two values. Text times a number repeats the text.
pub fn multiply(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(multiply, lhs, rhs),
        (Value::Int(x), Value::Int(y)) => Ok(x
            .checked_mul(*y)
            .map_or_else(|| Value::Float(*x as f64 * *y as f64), Value::Int)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x * y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 * y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x * *y as f64)),
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
            let n = usize::try_from((*n).max(0)).unwrap_or(0);
            Ok(Value::from(s.repeat(n)))
        }
        _ => Err(Error::type_mismatch(Type::Num, lhs.value_type())),
    }
}

/// Divides two values. Text divided by `n` splits into `n` chunks.
pub fn divide(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(divide, lhs, rhs),
        (Value::Str(s), Value::Int(n)) => {
            if *n <= 0 {
                return Err(Error::new(ErrorKind::DivisionByZero));
            }
            let chars: Vec<char> = s.chars().collect();
            let n = usize::try_from(*n).unwrap_or(1);
            let size = chars.len().div_ceil(n);
            let chunks: Vec<Value> = chars
                .chunks(size.max(1))
                .map(|c| Value::from(c.iter().collect::<String>()))
                .collect();
            Ok(Value::list(chunks))
        }
        (Value::Int(_) | Value::Float(_), Value::Int(0)) => {
            Err(Error::new(ErrorKind::DivisionByZero))
        }
        (Value::Int(x), Value::Int(y)) => {
            if x % y == 0 {
                Ok(Value::Int(x / y))
            } else {
                Ok(Value::Float(*x as f64 / *y as f64))
            }
        }
        (Value::Float(x), Value::Float(y)) => {
            if *y == 0.0 {
                Err(Error::new(ErrorKind::DivisionByZero))
            } else {
                Ok(Value::Float(x / y))
            }
        }
        (Value::Int(x), Value::Float(y)) => {
            if *y == 0.0 {
                Err(Error::new(ErrorKind::DivisionByZero))
            } else {
                Ok(Value::Float(*x as f64 / y))
            }
        }
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x / *y as f64)),
        _ => Err(Error::type_mismatch(Type::Num, lhs.value_type())),
    }
}

/// Integer (floor) division.
#[allow(clippy::cast_possible_truncation)]
pub fn int_divide(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(int_divide, lhs, rhs),
        (Value::Int(_) | Value::Float(_), Value::Int(0)) => {
            Err(Error::new(ErrorKind::DivisionByZero))
        }
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x.div_euclid(*y))),
        _ => {
            let x = lhs.expect_number()?;
            let y = rhs.expect_number()?;
            if y == 0.0 {
                return Err(Error::new(ErrorKind::DivisionByZero));
            }
            Ok(Value::Int((x / y).floor() as i64))
        }
    }
}

/// Modulo of two values.
pub fn modulo(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(modulo, lhs, rhs),
        (Value::Int(_) | Value::Float(_), Value::Int(0)) => {
            Err(Error::new(ErrorKind::DivisionByZero))
        }
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x.rem_euclid(*y))),
        _ => {
            let x = lhs.expect_number()?;
            let y = rhs.expect_number()?;
            if y == 0.0 {
                return Err(Error::new(ErrorKind::DivisionByZero));
            }
            Ok(Value::Float(x.rem_euclid(y)))
        }
    }
}

/// Quotient and remainder as a two-element list.
pub fn divmod(lhs: Value, rhs: Value) -> crate::Result<Value> {
    let q = int_divide(lhs.clone(), rhs.clone())?;
    let r = modulo(lhs, rhs)?;
    Ok(Value::list([q, r]))
}

/// Raises `lhs` to the power `rhs`.
pub fn exponate(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(exponate, lhs, rhs),
        (Value::Int(x), Value::Int(y)) if *y >= 0 => {
            let exp = u32::try_from(*y).ok();
            match exp.and_then(|e| x.checked_pow(e)) {
                Some(n) => Ok(Value::Int(n)),
                None => Ok(Value::Float((*x as f64).powf(*y as f64))),
            }
        }
        _ => {
            let x = lhs.expect_number()?;
            let y = rhs.expect_number()?;
            Ok(Value::Float(x.powf(y)))
        }
    }
}

/// Negates a value.
pub fn negate(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(negate, v),
        Value::Int(n) => Ok(Value::Int(-n)),
        Value::Float(n) => Ok(Value::Float(-n)),
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Halves a value; even integers stay integral.
pub fn halve(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(halve, v),
        Value::Int(n) if n % 2 == 0 => Ok(Value::Int(n / 2)),
        _ => Ok(Value::Float(v.expect_number()? / 2.0)),
    }
}

/// Logical/arithmetic complement `1 - x`.
pub fn complement(v: Value) -> crate::Result<Value> {
    subtract(Value::Int(1), v)
}

/// Absolute value.
pub fn abs(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(abs, v),
        Value::Int(n) => Ok(Value::Int(n.abs())),
        Value::Float(n) => Ok(Value::Float(n.abs())),
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Sign of a value: -1, 0, or 1.
pub fn sign(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(sign, v),
        Value::Int(n) => Ok(Value::Int(n.signum())),
        Value::Float(n) => {
            if n == 0.0 {
                Ok(Value::Int(0))
            } else {
                Ok(Value::Int(if n > 0.0 { 1 } else { -1 }))
            }
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Floor of a value.
#[allow(clippy::cast_possible_truncation)]
pub fn floor(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(floor, v),
        Value::Int(n) => Ok(Value::Int(n)),
        Value::Float(n) => Ok(Value::Int(n.floor() as i64)),
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Ceiling of a value.
#[allow(clippy::cast_possible_truncation)]
pub fn ceiling(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(ceiling, v),
        Value::Int(n) => Ok(Value::Int(n)),
        Value::Float(n) => Ok(Value::Int(n.ceil() as i64)),
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Rounds to the nearest integer.
#[allow(clippy::cast_possible_truncation)]
pub fn round(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(round, v),
        Value::Int(n) => Ok(Value::Int(n)),
        Value::Float(n) => Ok(Value::Int(n.round() as i64)),
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Rounds `lhs` to `rhs` decimal places.
pub fn round_to(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(round_to, lhs, rhs),
        _ => {
            let places = rhs.expect_int()?;
            let factor = 10f64.powi(i32::try_from(places).unwrap_or(0));
            let x = lhs.expect_number()?;
            Ok(Value::Float((x * factor).round() / factor))
        }
    }
}

/// Squares a value.
pub fn square(v: Value) -> crate::Result<Value> {
    multiply(v.clone(), v)
}

/// Square root.
pub fn sqrt(v: Value) -> crate::Result<Value> {
    exponate(v, Value::Float(0.5))
}

/// Two to the power of the value.
pub fn two_power(v: Value) -> crate::Result<Value> {
    exponate(Value::Int(2), v)
}

/// Logarithm of `lhs` in base `rhs`.
pub fn log_base(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(log_base, lhs, rhs),
        _ => {
            let x = lhs.expect_number()?;
            let base = rhs.expect_number()?;
            Ok(Value::Float(x.log(base)))
        }
    }
}

/// Copies the sign of `rhs` onto `lhs`.
pub fn copysign(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(copysign, lhs, rhs),
        _ => {
            let x = lhs.expect_number()?;
            let y = rhs.expect_number()?;
            Ok(Value::Float(x.copysign(y)))
        }
    }
}

/// Applies a float function elementwise (for the trigonometric/log family).
pub fn float_unary(v: Value, f: fn(f64) -> f64) -> crate::Result<Value> {
    match v {
        Value::List(l) => {
            let mapped: crate::Result<Vec<Value>> = l
                .materialize()
                .into_iter()
                .map(|x| float_unary(x, f))
                .collect();
            Ok(Value::list(mapped?))
        }
        _ => Ok(Value::Float(f(v.expect_number()?))),
    }
}

// Bitwise operations (integers only).

/// Bitwise AND.
pub fn bit_and(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(bit_and, lhs, rhs),
        _ => Ok(Value::Int(lhs.expect_int()? & rhs.expect_int()?)),
    }
}

/// Bitwise OR.
pub fn bit_or(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(bit_or, lhs, rhs),
        _ => Ok(Value::Int(lhs.expect_int()? | rhs.expect_int()?)),
    }
}

/// Bitwise XOR.
pub fn bit_xor(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(bit_xor, lhs, rhs),
        _ => Ok(Value::Int(lhs.expect_int()? ^ rhs.expect_int()?)),
    }
}

/// Bitwise NOT.
pub fn bit_not(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(bit_not, v),
        _ => Ok(Value::Int(!v.expect_int()?)),
    }
}

/// Right shift.
pub fn rshift(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(rshift, lhs, rhs),
        _ => {
            let shift = u32::try_from(rhs.expect_int()?.clamp(0, 63)).unwrap_or(0);
            Ok(Value::Int(lhs.expect_int()? >> shift))
        }
    }
}

/// Left shift.
pub fn lshift(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(lshift, lhs, rhs),
        _ => {
            let shift = u32::try_from(rhs.expect_int()?.clamp(0, 63)).unwrap_or(0);
            Ok(Value::Int(lhs.expect_int()? << shift))
        }
    }
}
