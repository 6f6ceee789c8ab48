//! Number-theory primitives: primality, divisors, combinatorics, ranges.

use crate::error::Error;
use crate::list::List;
use crate::types::Type;
use crate::value::Value;

use super::arith::{vectorise1, vectorise2};

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut d = 5i64;
    while d * d <= n {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Primality as a value predicate, elementwise over sequences.
pub fn prime_check(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(prime_check, v),
        _ => Ok(Value::from(is_prime(v.expect_int()?))),
    }
}

/// The smallest prime strictly greater than the value.
pub fn next_prime(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(next_prime, v),
        _ => {
            let mut n = v.expect_int()?.max(1);
            loop {
                n += 1;
                if is_prime(n) {
                    return Ok(Value::Int(n));
                }
            }
        }
    }
}

/// The largest prime strictly less than the value, or 2 when none exists.
pub fn prev_prime(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(prev_prime, v),
        _ => {
            let mut n = v.expect_int()?;
            while n > 2 {
                n -= 1;
                if is_prime(n) {
                    return Ok(Value::Int(n));
                }
            }
            Ok(Value::Int(2))
        }
    }
}

/// The prime nearest to the value (ties go downward).
pub fn closest_prime(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(closest_prime, v),
        _ => {
            let n = v.expect_int()?;
            if is_prime(n) {
                return Ok(Value::Int(n));
            }
            let down = prev_prime(Value::Int(n))?.expect_int()?;
            let up = next_prime(Value::Int(n))?.expect_int()?;
            if (n - down) <= (up - n) {
                Ok(Value::Int(down))
            } else {
                Ok(Value::Int(up))
            }
        }
    }
}

/// The `n`th prime, zero-indexed: `nth_prime(0) == 2`.
pub fn nth_prime(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(nth_prime, v),
        _ => {
            let target = v.expect_int()?;
            if target < 0 {
                return Err(Error::type_mismatch(Type::Num, v.value_type()));
            }
            let mut seen = -1i64;
            let mut n = 1i64;
            loop {
                n += 1;
                if is_prime(n) {
                    seen += 1;
                    if seen == target {
                        return Ok(Value::Int(n));
                    }
                }
            }
        }
    }
}

/// The distinct prime factors, ascending.
pub fn prime_factors(v: Value) -> crate::Result<Value> {
    let factors = factorize(v.expect_int()?);
    let mut distinct: Vec<i64> = factors;
    distinct.dedup();
    Ok(Value::from(distinct))
}

/// The prime factorization with multiplicity, ascending.
pub fn all_prime_factors(v: Value) -> crate::Result<Value> {
    Ok(Value::from(factorize(v.expect_int()?)))
}

fn factorize(mut n: i64) -> Vec<i64> {
    let mut out = Vec::new();
    n = n.abs();
    let mut d = 2i64;
    while d * d <= n {
        while n % d == 0 {
            out.push(d);
            n /= d;
        }
        d += 1;
    }
    if n > 1 {
        out.push(n);
    }
    out
}

/// All positive divisors, ascending.
pub fn divisors(v: Value) -> crate::Result<Value> {
    let n = v.expect_int()?.abs();
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1i64;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    large.reverse();
    small.extend(large);
    Ok(Value::from(small))
}

/// The sum of proper divisors (aliquot sum).
pub fn aliquot_sum(v: Value) -> crate::Result<Value> {
    let n = v.expect_int()?.abs();
    let all = divisors(Value::Int(n))?;
    let sum: i64 = all
        .as_list()
        .map(|l| {
            l.materialize()
                .into_iter()
                .filter_map(|d| d.as_int())
                .filter(|d| *d != n)
                .sum()
        })
        .unwrap_or(0);
    Ok(Value::Int(sum))
}

/// Factorial, elementwise over sequences.
#[allow(clippy::cast_precision_loss)]
pub fn factorial(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(factorial, v),
        _ => {
            let n = v.expect_int()?;
            if n < 0 {
                return Err(Error::type_mismatch(Type::Num, Type::Num));
            }
            let mut acc = 1i64;
            for k in 2..=n {
                match acc.checked_mul(k) {
                    Some(next) => acc = next,
                    None => {
                        // Finish in floats once i64 runs out.
                        let mut f = acc as f64;
                        for j in k..=n {
                            f *= j as f64;
                        }
                        return Ok(Value::Float(f));
                    }
                }
            }
            Ok(Value::Int(acc))
        }
    }
}

/// Binomial coefficient `C(lhs, rhs)`.
pub fn ncr(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(ncr, lhs, rhs),
        _ => {
            let n = lhs.expect_int()?;
            let r = rhs.expect_int()?;
            if r < 0 || r > n {
                return Ok(Value::Int(0));
            }
            let r = r.min(n - r);
            let mut acc = 1i64;
            for k in 0..r {
                acc = acc
                    .checked_mul(n - k)
                    .and_then(|a| a.checked_div(k + 1))
                    .ok_or_else(|| Error::internal("binomial overflow"))?;
            }
            Ok(Value::Int(acc))
        }
    }
}

/// Permutation count `P(lhs, rhs) = lhs! / (lhs - rhs)!`.
pub fn npr(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(npr, lhs, rhs),
        _ => {
            let n = lhs.expect_int()?;
            let r = rhs.expect_int()?;
            if r < 0 || r > n {
                return Ok(Value::Int(0));
            }
            let mut acc = 1i64;
            for k in (n - r + 1)..=n {
                acc = acc
                    .checked_mul(k)
                    .ok_or_else(|| Error::internal("permutation overflow"))?;
            }
            Ok(Value::Int(acc))
        }
    }
}

/// Greatest common divisor of two integers.
#[must_use]
pub fn gcd_pair(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of a sequence.
pub fn gcd_list(v: Value) -> crate::Result<Value> {
    let items = super::to_vec(&v)?;
    let mut acc = 0i64;
    for item in items {
        acc = gcd_pair(acc, item.expect_int()?);
    }
    Ok(Value::Int(acc))
}

/// Least common multiple, elementwise over sequences.
pub fn lcm(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(lcm, lhs, rhs),
        _ => {
            let a = lhs.expect_int()?;
            let b = rhs.expect_int()?;
            if a == 0 || b == 0 {
                return Ok(Value::Int(0));
            }
            let g = gcd_pair(a, b);
            (a / g)
                .checked_mul(b)
                .map(|n| Value::Int(n.abs()))
                .ok_or_else(|| Error::internal("lcm overflow"))
        }
    }
}

/// Whether the value is a perfect square.
pub fn is_square(v: Value) -> crate::Result<Value> {
    match v {
        Value::List(_) => vectorise1(is_square, v),
        _ => {
            let n = v.expect_int()?;
            if n < 0 {
                return Ok(Value::Int(0));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
            let root = (n as f64).sqrt().round() as i64;
            Ok(Value::from(root * root == n))
        }
    }
}

/// How many times `rhs` divides `lhs` (multiplicity).
pub fn multiplicity(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(multiplicity, lhs, rhs),
        _ => {
            let mut n = lhs.expect_int()?;
            let d = rhs.expect_int()?;
            if d == 0 || d.abs() == 1 || n == 0 {
                return Ok(Value::Int(0));
            }
            let mut count = 0i64;
            while n % d == 0 {
                n /= d;
                count += 1;
            }
            Ok(Value::Int(count))
        }
    }
}

/// Whether `lhs` is divisible by `rhs`.
pub fn is_divisible(lhs: Value, rhs: Value) -> crate::Result<Value> {
    match (&lhs, &rhs) {
        (Value::List(_), _) | (_, Value::List(_)) => vectorise2(is_divisible, lhs, rhs),
        _ => {
            let a = lhs.expect_int()?;
            let b = rhs.expect_int()?;
            if b == 0 {
                return Ok(Value::Int(0));
            }
            Ok(Value::from(a % b == 0))
        }
    }
}

/// A range between two bounds, exclusive of the end, descending when
/// `start > end`.
pub fn orderless_range(start: Value, end: Value) -> crate::Result<Value> {
    let a = start.expect_int()?;
    let b = end.expect_int()?;
    let items: Vec<Value> = if a <= b {
        (a..b).map(Value::Int).collect()
    } else {
        let mut v: Vec<Value> = ((b + 1)..=a).map(Value::Int).collect();
        v.reverse();
        v
    };
    Ok(Value::List(List::eager(items)))
}

/// The integer partitions of a non-negative number, each a non-increasing
/// list, largest-first order.
pub fn partitions(v: &Value) -> crate::Result<Value> {
    let n = v.expect_int()?;
    if n < 0 {
        return Ok(Value::list([]));
    }
    fn walk(remaining: i64, cap: i64, current: &mut Vec<i64>, out: &mut Vec<Value>) {
        if remaining == 0 {
            out.push(Value::from(current.clone()));
            return;
        }
        let mut part = cap.min(remaining);
        while part >= 1 {
            current.push(part);
            walk(remaining - part, part, current, out);
            current.pop();
            part -= 1;
        }
    }
    let mut out = Vec::new();
    walk(n, n, &mut Vec::new(), &mut out);
    Ok(Value::list(out))
}

/// Rational approximation of a float as a `[numerator, denominator]` list.
///
/// Uses a Stern-Brocot walk with a fixed tolerance; integers map to
/// `[n, 1]`.
pub fn fractionify(v: Value) -> crate::Result<Value> {
    match v {
        Value::Int(n) => Ok(Value::list([Value::Int(n), Value::Int(1)])),
        Value::Float(x) => {
            let negative = x < 0.0;
            let x = x.abs();
            let tolerance = 1e-9;
            let (mut lo, mut hi) = ((0i64, 1i64), (1i64, 0i64));
            #[allow(clippy::cast_precision_loss)]
            for _ in 0..10_000 {
                let mid = (lo.0 + hi.0, lo.1 + hi.1);
                let value = mid.0 as f64 / mid.1 as f64;
                if (value - x).abs() < tolerance {
                    let num = if negative { -mid.0 } else { mid.0 };
                    return Ok(Value::list([Value::Int(num), Value::Int(mid.1)]));
                }
                if value < x {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            Ok(Value::list([Value::Float(if negative { -x } else { x }), Value::Int(1)]))
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Converts a `[numerator, denominator]` list (or a number) to a float.
#[allow(clippy::cast_precision_loss)]
pub fn decimalify(v: Value) -> crate::Result<Value> {
    match &v {
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Float(_) => Ok(v),
        Value::List(l) => {
            let items = l.materialize();
            if items.len() == 2 {
                let num = items.get(0).unwrap().expect_number()?;
                let den = items.get(1).unwrap().expect_number()?;
                if den == 0.0 {
                    return Err(Error::new(crate::ErrorKind::DivisionByZero));
                }
                Ok(Value::Float(num / den))
            } else {
                Err(Error::type_mismatch(Type::Num, Type::List))
            }
        }
        _ => Err(Error::type_mismatch(Type::Num, v.value_type())),
    }
}

/// Euclidean distance between two equal-length numeric sequences.
pub fn distance_between(lhs: Value, rhs: Value) -> crate::Result<Value> {
    let a = super::to_vec(&lhs)?;
    let b = super::to_vec(&rhs)?;
    let mut sum = 0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let d = x.expect_number()? - y.expect_number()?;
        sum += d * d;
    }
    Ok(Value::Float(sum.sqrt()))
}

/// Real roots of `x² + bx + c` (`∆Q`) or `ax² + bx` (`∆q`), ascending.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Value {
    if a == 0.0 {
        if b == 0.0 {
            return Value::list([]);
        }
        return Value::list([Value::Float(-c / b)]);
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Value::list([]);
    }
    let sq = disc.sqrt();
    let mut roots = [(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)];
    roots.sort_by(f64::total_cmp);
    if disc == 0.0 {
        Value::list([Value::Float(roots[0])])
    } else {
        Value::list([Value::Float(roots[0]), Value::Float(roots[1])])
    }
}
