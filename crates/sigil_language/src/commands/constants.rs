//! Zero-arity constant pushers: bare constants and the `k` library.
//!
//! These are the degenerate case of the operation compiler with arity 0
//! whose template is a literal producer. The calendar/time entries read the
//! environment's clock service and are nondeterministic by design, as are
//! none of the others.

use sigil_foundation::{Result, Value, list};

use crate::command::Outcome;
use crate::commands::CommandSet;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

pub(crate) fn register(set: &mut CommandSet) -> Result<()> {
    // Bare constants.
    set.constant("₀", || Value::Int(10))?;
    set.constant("₁", || Value::Int(100))?;
    set.constant("₄", || Value::Int(26))?;
    set.constant("₆", || Value::Int(64))?;
    set.constant("₇", || Value::Int(128))?;
    set.constant("₈", || Value::Int(256))?;
    set.constant("u", || Value::Int(-1))?;
    set.constant("¶", || Value::from("\n"))?;
    set.constant("¤", || Value::from(""))?;
    set.constant("ð", || Value::from(" "))?;
    set.constant("×", || Value::from("*"))?;
    set.constant("∞", || Value::List(list::naturals()))?;

    // Common words and alphabets.
    set.constant("kA", || Value::from(UPPERCASE))?;
    set.constant("ka", || Value::from(LOWERCASE))?;
    set.constant("kL", || {
        Value::from(format!("{LOWERCASE}{UPPERCASE}"))
    })?;
    set.constant("kB", || {
        Value::from(format!("{UPPERCASE}{LOWERCASE}"))
    })?;
    set.constant("kZ", || {
        Value::from(UPPERCASE.chars().rev().collect::<String>())
    })?;
    set.constant("kz", || {
        Value::from(LOWERCASE.chars().rev().collect::<String>())
    })?;
    set.constant("kl", || {
        Value::from(
            format!("{LOWERCASE}{UPPERCASE}")
                .chars()
                .rev()
                .collect::<String>(),
        )
    })?;
    set.constant("kd", || Value::from(DIGITS))?;
    set.constant("kr", || {
        Value::from(format!("{DIGITS}{LOWERCASE}{UPPERCASE}"))
    })?;
    set.constant("k6", || Value::from("0123456789abcdef"))?;
    set.constant("k^", || Value::from("0123456789ABCDEF"))?;
    set.constant("ko", || Value::from("01234567"))?;
    set.constant("kp", || {
        Value::from("!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~")
    })?;
    set.constant("kw", || Value::from(" \t\n\r\x0b\x0c"))?;
    set.constant("kv", || Value::from("aeiou"))?;
    set.constant("kV", || Value::from("AEIOU"))?;
    set.constant("k∨", || Value::from("aeiouAEIOU"))?;
    set.constant("k∪", || Value::from("aeiouy"))?;
    set.constant("k⊍", || Value::from("AEIOUY"))?;
    set.constant("k∩", || Value::from("aeiouyAEIOUY"))?;
    set.constant("k⁰", || Value::from("bcfghjklmnpqrstvwxyz"))?;
    set.constant("k¹", || Value::from("bcfghjklmnpqrstvwxz"))?;
    set.constant("k•", || {
        Value::list([
            Value::from("qwertyuiop"),
            Value::from("asdfghjkl"),
            Value::from("zxcvbnm"),
        ])
    })?;
    set.constant("kf", || Value::from("Fizz"))?;
    set.constant("kb", || Value::from("Buzz"))?;
    set.constant("kF", || Value::from("FizzBuzz"))?;
    set.constant("kH", || Value::from("Hello, World!"))?;
    set.constant("kh", || Value::from("Hello World"))?;
    set.constant("kW", || Value::from("https://"))?;
    set.constant("k℅", || Value::from("http://"))?;
    set.constant("k↳", || Value::from("https://www."))?;
    set.constant("k²", || Value::from("http://www."))?;

    // The code page itself.
    set.constant("k⟇", || Value::from(crate::codepage::CODE_PAGE))?;

    // Numeric constants.
    set.constant("k1", || Value::Int(1_000))?;
    set.constant("k2", || Value::Int(10_000))?;
    set.constant("k3", || Value::Int(100_000))?;
    set.constant("k4", || Value::Int(1_000_000))?;
    set.constant("k5", || Value::Int(10_000_000))?;
    set.constant("k¶", || Value::Int(512))?;
    set.constant("k⁋", || Value::Int(1_024))?;
    set.constant("k¦", || Value::Int(2_048))?;
    set.constant("kṄ", || Value::Int(4_096))?;
    set.constant("kṅ", || Value::Int(8_192))?;
    set.constant("k¡", || Value::Int(16_384))?;
    set.constant("kε", || Value::Int(32_768))?;
    set.constant("k₴", || Value::Int(65_536))?;
    set.constant("k×", || Value::Int(2_147_483_648))?;
    set.constant("kḭ", || Value::Int(1 << 32))?;
    set.constant("k⋏", || Value::Int(1 << 20))?;
    set.constant("k⋎", || Value::Int(1 << 30))?;
    set.constant("kR", || Value::Int(360))?;
    set.constant("ke", || Value::Float(std::f64::consts::E))?;
    set.constant("ki", || Value::Float(std::f64::consts::PI))?;
    set.constant("kt", || Value::Float(std::f64::consts::TAU))?;
    set.constant("kn", || Value::Float(f64::NAN))?;
    set.constant("kṗ", || Value::Float((1.0 + 5f64.sqrt()) / 2.0))?;

    // Small list constants.
    set.constant("k½", || Value::from(vec![1i64, 2]))?;
    set.constant("k+", || Value::from(vec![1i64, -1]))?;
    set.constant("k-", || Value::from(vec![-1i64, 1]))?;
    set.constant("k≈", || Value::from(vec![0i64, 1]))?;
    set.constant("kɽ", || Value::from(vec![-1i64, 0, 1]))?;

    // Geometric neighbor offsets.
    set.constant("k□", || {
        Value::list([
            Value::from(vec![0i64, 1]),
            Value::from(vec![1i64, 0]),
            Value::from(vec![0i64, -1]),
            Value::from(vec![-1i64, 0]),
        ])
    })?;
    set.constant("k…", || {
        Value::list([Value::from(vec![0i64, 1]), Value::from(vec![1i64, 0])])
    })?;

    // Bracket strings.
    set.constant("kβ", || Value::from("{}[]<>()"))?;
    set.constant("kḂ", || Value::from("()[]{}"))?;
    set.constant("kß", || Value::from("()[]"))?;
    set.constant("kḃ", || Value::from("([{"))?;
    set.constant("k≥", || Value::from(")]}"))?;
    set.constant("k≤", || Value::from("([{<"))?;
    set.constant("kΠ", || Value::from(")]}>"))?;
    set.constant("k[", || Value::from("[]"))?;
    set.constant("k]", || Value::from("]["))?;
    set.constant("k(", || Value::from("()"))?;
    set.constant("k)", || Value::from(")("))?;
    set.constant("k{", || Value::from("{}"))?;
    set.constant("k}", || Value::from("}{"))?;
    set.constant("k<", || Value::from("<>"))?;
    set.constant("k>", || Value::from("><"))?;
    set.constant("k/", || Value::from("/\\"))?;
    set.constant("k\\", || Value::from("\\/"))?;

    // Calendar constants.
    set.constant("k§", || {
        Value::list(
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
                .map(Value::from),
        )
    })?;
    set.constant("kɖ", || {
        Value::list(
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
                .map(Value::from),
        )
    })?;
    set.constant("kṁ", || {
        Value::from(vec![31i64, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31])
    })?;

    // Clock reads. Nondeterministic by design; routed through the
    // environment's clock service.
    set.op("kD", 0, |interp, _| {
        let now = interp.env.now();
        Ok(Outcome::One(Value::from(format!(
            "{:04}-{:02}-{:02}",
            now.year, now.month, now.day
        ))))
    })?;
    set.op("kḋ", 0, |interp, _| {
        let now = interp.env.now();
        Ok(Outcome::One(Value::from(format!(
            "{:02}/{:02}/{:04}",
            now.day, now.month, now.year
        ))))
    })?;
    set.op("kḊ", 0, |interp, _| {
        let now = interp.env.now();
        Ok(Outcome::One(Value::from(format!(
            "{:02}/{:02}/{:02}",
            now.month,
            now.day,
            now.year.rem_euclid(100)
        ))))
    })?;
    set.op("kð", 0, |interp, _| {
        let now = interp.env.now();
        Ok(Outcome::One(Value::from(vec![
            i64::from(now.day),
            i64::from(now.month),
            now.year,
        ])))
    })?;
    set.op("kN", 0, |interp, _| {
        let now = interp.env.now();
        Ok(Outcome::One(Value::from(vec![
            i64::from(now.hour),
            i64::from(now.minute),
            i64::from(now.second),
        ])))
    })?;
    set.op("kḢ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(i64::from(interp.env.now().hour))))
    })?;
    set.op("kṀ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(i64::from(interp.env.now().minute))))
    })?;
    set.op("kṠ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(i64::from(interp.env.now().second))))
    })?;
    set.op("kτ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(i64::from(
            interp.env.now().day_of_year,
        ))))
    })?;
    set.op("kṡ", 0, |interp, _| {
        Ok(Outcome::One(Value::Float(interp.env.now().epoch_seconds)))
    })?;
    set.op("kẇ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(i64::from(interp.env.now().weekday))))
    })?;
    set.op("kẆ", 0, |interp, _| {
        Ok(Outcome::One(Value::Int(
            i64::from(interp.env.now().weekday) + 1,
        )))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::context::{Env, FixedClock, Timestamp};
    use crate::interp::{eval, eval_with_env};
    use sigil_foundation::Value;

    #[test]
    fn bare_constants() {
        assert_eq!(eval("₀₁+").unwrap(), vec![Value::Int(110)]);
        assert_eq!(eval("u").unwrap(), vec![Value::Int(-1)]);
        assert_eq!(eval("ð").unwrap(), vec![Value::from(" ")]);
    }

    #[test]
    fn alphabets() {
        assert_eq!(
            eval("kaL").unwrap(),
            vec![Value::Int(26)]
        );
        assert_eq!(eval("kH").unwrap(), vec![Value::from("Hello, World!")]);
    }

    #[test]
    fn code_page_constant_has_256_symbols() {
        assert_eq!(eval("k⟇L").unwrap(), vec![Value::Int(256)]);
    }

    #[test]
    fn naturals_constant_is_lazy() {
        // Bounded access into the infinite stream terminates.
        assert_eq!(eval("∞ 5i").unwrap(), vec![Value::Int(5)]);
    }

    #[test]
    fn clock_constants_use_the_service() {
        // 2026-08-06 12:30:45 UTC, a Thursday.
        let ts = Timestamp::from_epoch(1_786_019_445, 1_786_019_445.0);
        let mut env = Env::new().with_clock(Box::new(FixedClock(ts)));
        assert_eq!(
            eval_with_env("kD", &mut env).unwrap(),
            vec![Value::from("2026-08-06")]
        );
        env.stack.clear();
        assert_eq!(
            eval_with_env("kN", &mut env).unwrap(),
            vec![Value::from(vec![12i64, 30, 45])]
        );
        env.stack.clear();
        assert_eq!(eval_with_env("kẇ", &mut env).unwrap(), vec![Value::Int(3)]);
    }
}
