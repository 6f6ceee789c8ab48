//! The `∆` namespace: trigonometry, logarithms, number theory.

use sigil_foundation::ops::compare::Comparison;
use sigil_foundation::{Result, Value, ops};

use crate::command::Outcome;
use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // Trigonometry, elementwise over sequences.
    set.unary("∆s", |v| ops::arith::float_unary(v, f64::sin))?;
    set.unary("∆c", |v| ops::arith::float_unary(v, f64::cos))?;
    set.unary("∆t", |v| ops::arith::float_unary(v, f64::tan))?;
    set.unary("∆S", |v| ops::arith::float_unary(v, f64::asin))?;
    set.unary("∆C", |v| ops::arith::float_unary(v, f64::acos))?;
    set.unary("∆T", |v| ops::arith::float_unary(v, f64::atan))?;
    set.unary("∆D", |v| ops::arith::float_unary(v, f64::to_degrees))?;
    set.unary("∆R", |v| ops::arith::float_unary(v, f64::to_radians))?;

    // Exponentials and logarithms.
    set.unary("∆e", |v| ops::arith::float_unary(v, f64::exp))?;
    set.unary("∆E", |v| ops::arith::float_unary(v, f64::exp_m1))?;
    set.unary("∆L", |v| ops::arith::float_unary(v, f64::ln))?;
    set.unary("∆l", |v| ops::arith::float_unary(v, f64::log2))?;
    set.unary("∆τ", |v| ops::arith::float_unary(v, f64::log10))?;

    // Number theory.
    set.unary("∆Ṗ", ops::number::next_prime)?;
    set.unary("∆ṗ", ops::number::prev_prime)?;
    set.unary("∆p", ops::number::closest_prime)?;
    set.unary("∆²", ops::number::is_square)?;
    set.unary("∆K", ops::number::aliquot_sum)?;
    set.binary("∆ƈ", ops::number::npr)?;
    set.binary("∆Ŀ", ops::number::lcm)?;

    set.binary("∆±", ops::arith::copysign)?;
    set.binary("∆W", ops::arith::round_to)?;
    set.binary("∆d", ops::number::distance_between)?;
    set.unary_ref("∆≤", |v| {
        let magnitude = ops::arith::abs(v.clone())?;
        ops::compare::compare(&magnitude, &Value::Int(1), Comparison::LessThanEqual)
    })?;

    // Quadratic roots: ∆q solves ax² + bx = 0, ∆Q solves x² + bx + c = 0.
    set.op("∆q", 2, |_, operands| {
        let (a, b) = operands.binary();
        Ok(Outcome::One(ops::number::quadratic_roots(
            a.expect_number()?,
            b.expect_number()?,
            0.0,
        )))
    })?;
    set.op("∆Q", 2, |_, operands| {
        let (b, c) = operands.binary();
        Ok(Outcome::One(ops::number::quadratic_roots(
            1.0,
            b.expect_number()?,
            c.expect_number()?,
        )))
    })?;

    // ∆Ṙ: uniform random float in [0, 1). Nondeterministic by design;
    // drawn from the environment's seedable RNG.
    set.op("∆Ṙ", 0, |interp, _| {
        use rand::Rng;
        Ok(Outcome::One(Value::Float(interp.env.rng.r#gen::<f64>())))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::interp::eval;
    use sigil_foundation::Value;

    #[test]
    fn trig_basics() {
        assert_eq!(eval("0∆s").unwrap(), vec![Value::Float(0.0)]);
        assert_eq!(eval("0∆c").unwrap(), vec![Value::Float(1.0)]);
    }

    #[test]
    fn logs() {
        assert_eq!(eval("8∆l").unwrap(), vec![Value::Float(3.0)]);
        assert_eq!(eval("100∆τ").unwrap(), vec![Value::Float(2.0)]);
        assert_eq!(eval("1∆L").unwrap(), vec![Value::Float(0.0)]);
    }

    #[test]
    fn prime_neighbors() {
        assert_eq!(eval("10∆Ṗ").unwrap(), vec![Value::Int(11)]);
        assert_eq!(eval("10∆ṗ").unwrap(), vec![Value::Int(7)]);
        assert_eq!(eval("10∆p").unwrap(), vec![Value::Int(11)]);
    }

    #[test]
    fn number_theory() {
        assert_eq!(eval("16∆²").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("12∆K").unwrap(), vec![Value::Int(16)]);
        assert_eq!(eval("5 2∆ƈ").unwrap(), vec![Value::Int(20)]);
        assert_eq!(eval("4 6∆Ŀ").unwrap(), vec![Value::Int(12)]);
    }

    #[test]
    fn quadratics() {
        // x² - 3x + 2 = 0 has roots 1 and 2.
        assert_eq!(
            eval("3N 2∆Q").unwrap(),
            vec![Value::list([Value::Float(1.0), Value::Float(2.0)])]
        );
    }

    #[test]
    fn rounding_and_magnitude() {
        assert_eq!(eval("1.26 1∆W").unwrap(), vec![Value::Float(1.3)]);
        assert_eq!(eval("0.5∆≤").unwrap(), vec![Value::Int(1)]);
        assert_eq!(eval("2∆≤").unwrap(), vec![Value::Int(0)]);
    }

    #[test]
    fn random_float_is_in_unit_interval() {
        let got = eval("∆Ṙ").unwrap();
        let Value::Float(x) = got[0] else {
            panic!("expected float");
        };
        assert!((0.0..1.0).contains(&x));
    }
}
