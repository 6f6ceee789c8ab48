//! Arithmetic and bitwise commands.
//!
//! All binary entries follow the table-wide slot convention: slot 1 (the
//! topmost value) is the right-hand operand, so `3 4 -` is `3 - 4`.

use sigil_foundation::{Result, Value, ops};

use crate::commands::CommandSet;

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    set.binary("+", ops::arith::add)?;
    set.binary("-", ops::arith::subtract)?;
    set.binary("*", ops::arith::multiply)?;
    set.binary("/", ops::arith::divide)?;
    set.binary("%", ops::arith::modulo)?;
    set.binary("ḭ", ops::arith::int_divide)?;
    set.binary("ḋ", ops::arith::divmod)?;
    set.binary("e", ops::arith::exponate)?;
    set.binary("•", ops::arith::log_base)?;

    set.unary("N", ops::arith::negate)?;
    set.unary("½", ops::arith::halve)?;
    set.unary("d", |v| ops::arith::multiply(v, Value::Int(2)))?;
    set.unary("⌐", ops::arith::complement)?;
    set.unary("ȧ", ops::arith::abs)?;
    set.unary("±", ops::arith::sign)?;
    set.unary("√", ops::arith::sqrt)?;
    set.unary("²", ops::arith::square)?;
    set.unary("Ǎ", ops::arith::two_power)?;
    set.unary("⌈", ops::arith::ceiling)?;
    set.unary("⌊", ops::arith::floor)?;
    set.unary("ṙ", ops::arith::round)?;
    set.unary("›", |v| ops::arith::add(v, Value::Int(1)))?;
    set.unary("‹", |v| ops::arith::subtract(v, Value::Int(1)))?;
    set.unary("∷", |v| ops::arith::modulo(v, Value::Int(2)))?;

    set.unary("¡", ops::number::factorial)?;
    set.binary("ƈ", ops::number::ncr)?;
    set.unary("æ", ops::number::prime_check)?;
    set.unary("K", ops::number::divisors)?;
    set.unary("ǎ", ops::number::nth_prime)?;
    set.unary("Ǐ", ops::number::prime_factors)?;
    set.unary("ǐ", ops::number::all_prime_factors)?;
    set.binary("Ǒ", ops::number::multiplicity)?;
    set.binary("Ḋ", ops::number::is_divisible)?;
    set.unary_ref("ǒ", |v| match v {
        Value::Str(s) => Ok(Value::from(s.is_empty())),
        Value::List(l) => Ok(Value::from(l.is_empty())),
        _ => Ok(Value::from(false)),
    })?;
    set.unary("ġ", ops::number::gcd_list)?;
    set.unary("ƒ", ops::number::fractionify)?;
    set.unary("ɖ", ops::number::decimalify)?;

    // Ranges. ʀ/ʁ/ɾ/ɽ are the four one-operand range flavors; r is the
    // two-operand orderless range.
    set.unary("ʀ", |v| {
        ops::number::orderless_range(Value::Int(0), ops::arith::add(v, Value::Int(1))?)
    })?;
    set.unary("ʁ", |v| ops::number::orderless_range(Value::Int(0), v))?;
    set.unary("ɾ", |v| {
        ops::number::orderless_range(Value::Int(1), ops::arith::add(v, Value::Int(1))?)
    })?;
    set.unary("ɽ", |v| ops::number::orderless_range(Value::Int(1), v))?;
    set.binary("r", ops::number::orderless_range)?;

    // Bitwise family.
    set.binary("⋏", ops::arith::bit_and)?;
    set.binary("⋎", ops::arith::bit_or)?;
    set.binary("꘍", ops::arith::bit_xor)?;
    set.unary("ꜝ", ops::arith::bit_not)?;
    set.binary("↳", ops::arith::rshift)?;
    set.binary("↲", ops::arith::lshift)?;

    // ₂ / ₃: divisibility for numbers, length shape for sequences.
    set.unary_ref("₂", |v| match v {
        Value::Int(_) | Value::Float(_) => {
            ops::number::is_divisible(v.clone(), Value::Int(2))
        }
        _ => Ok(Value::from(ops::to_vec(v)?.len() % 2 == 0)),
    })?;
    set.unary_ref("₃", |v| match v {
        Value::Int(_) | Value::Float(_) => {
            ops::number::is_divisible(v.clone(), Value::Int(3))
        }
        _ => Ok(Value::from(ops::to_vec(v)?.len() == 1)),
    })?;

    Ok(())
}
