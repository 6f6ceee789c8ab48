//! Whole-program golf exercises across all layers.

use sigil_foundation::Value;
use sigil_language::{Env, eval, eval_with_env};

fn ints(xs: &[i64]) -> Value {
    Value::from(xs.to_vec())
}

#[test]
fn triangular_numbers() {
    // Running sums of 1..10.
    assert_eq!(
        eval("10ɾ¦").unwrap(),
        vec![ints(&[1, 3, 6, 10, 15, 21, 28, 36, 45, 55])]
    );
}

#[test]
fn perfect_numbers_below_thirty() {
    // n where the aliquot sum equals n.
    assert_eq!(
        eval("30ɾλ:∆K=;F").unwrap(),
        vec![ints(&[6, 28])]
    );
}

#[test]
fn fibonacci_prefix_via_stream() {
    assert_eq!(
        eval("ÞF 8Ẏ").unwrap(),
        vec![ints(&[1, 1, 2, 3, 5, 8, 13, 21])]
    );
}

#[test]
fn symbol_code_sum() {
    // 9875 -> text -> symbol codes -> sum.
    assert_eq!(eval("9875S C∑").unwrap(), vec![Value::Int(221)]);
}

#[test]
fn palindrome_check() {
    assert_eq!(eval("`racecar`:Ṙ⁼").unwrap(), vec![Value::Int(1)]);
    assert_eq!(eval("`sigil`:Ṙ⁼").unwrap(), vec![Value::Int(0)]);
}

#[test]
fn vowels_in_greeting() {
    // Count symbols of "Hello World" that appear in the vowel constant.
    assert_eq!(
        eval("khλkv$c;F L").unwrap(),
        vec![Value::Int(3)]
    );
}

#[test]
fn collatz_step_for_odd() {
    // One conditional step: 7 is odd, so 3n + 1.
    assert_eq!(eval("7:∷ß λ3*›;").unwrap(), vec![Value::Int(22)]);
}

#[test]
fn printed_fizz_line() {
    let mut env = Env::new();
    eval_with_env("kf kb+ ,", &mut env).unwrap();
    assert_eq!(env.output(), "FizzBuzz\n");
}

#[test]
fn reversed_alphabet_prefix() {
    assert_eq!(eval("kZ 3Ẏ").unwrap(), vec![Value::from("ZYX")]);
}

#[test]
fn deep_recursion_countdown() {
    // A lambda that pushes its operand to the global stack, decrements,
    // and conditionally recurses; the caller then sums what accumulated.
    assert_eq!(
        eval("3λ:⅛ ‹:ßx;† ¾∑").unwrap(),
        vec![Value::Int(0), Value::Int(6)]
    );
}
