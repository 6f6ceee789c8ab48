//! End-to-end program tests.

use sigil_foundation::Value;
use sigil_language::{Env, eval, eval_with_env};

fn ints(xs: &[i64]) -> Value {
    Value::from(xs.to_vec())
}

// =============================================================================
// The canonical fixtures
// =============================================================================

#[test]
fn addition_program() {
    assert_eq!(eval("3 4+").unwrap(), vec![Value::Int(7)]);
}

#[test]
fn swap_program() {
    assert_eq!(eval("1 2$").unwrap(), vec![Value::Int(2), Value::Int(1)]);
}

#[test]
fn infinite_stream_index_terminates() {
    // Indexing into the infinite naturals stream must not materialize it.
    assert_eq!(eval("∞ 5i").unwrap(), vec![Value::Int(5)]);
}

#[test]
fn register_round_trip_with_interference() {
    // Store, churn the stack, recall: the stored value is unaffected.
    assert_eq!(
        eval("9£ 1 2+ 3* ¥").unwrap(),
        vec![Value::Int(9), Value::Int(9)]
    );
}

// =============================================================================
// Composite programs
// =============================================================================

#[test]
fn sum_of_squares() {
    // 1² + 2² + ... + 5² = 55
    assert_eq!(eval("5ɾv²∑").unwrap(), vec![Value::Int(55)]);
}

#[test]
fn primes_below_twenty() {
    assert_eq!(
        eval("20ɾλæ;F").unwrap(),
        vec![ints(&[2, 3, 5, 7, 11, 13, 17, 19])]
    );
}

#[test]
fn factorial_by_reduce() {
    assert_eq!(eval("6ɾλ2|*;R").unwrap(), vec![Value::Int(720)]);
}

#[test]
fn fizzbuzz_single_value() {
    // Classic divisibility pick for 15: divisible by both.
    assert_eq!(
        eval("15 3Ḋ 15 5Ḋ +").unwrap(),
        vec![Value::Int(2)]
    );
}

#[test]
fn string_pipeline() {
    assert_eq!(
        eval("`hello`Ṙ").unwrap(),
        vec![Value::from("olleh")]
    );
    assert_eq!(
        eval("kH` `€h").unwrap(),
        vec![Value::from("Hello,")]
    );
}

#[test]
fn nested_lambdas_and_map() {
    // Map (x -> x * x + 1) over 1..4.
    assert_eq!(eval("4ɾλ²›;M").unwrap(), vec![ints(&[2, 5, 10, 17])]);
}

#[test]
fn global_stack_across_functions() {
    // A lambda pushes to the global stack; the caller pops it back.
    assert_eq!(eval("5λ⅛;† ¼").unwrap(), vec![Value::Int(5)]);
}

#[test]
fn inputs_feed_programs() {
    let mut env = Env::new();
    env.set_inputs(vec![Value::Int(20), Value::Int(22)]);
    assert_eq!(eval_with_env("? ?+", &mut env).unwrap(), vec![Value::Int(42)]);
}

#[test]
fn output_collection() {
    let mut env = Env::new();
    eval_with_env("3ɾv², `done`,", &mut env).unwrap();
    assert_eq!(env.output(), "[1, 4, 9]\ndone\n");
}

#[test]
fn halt_mid_program() {
    assert_eq!(eval("1 2 Q +").unwrap(), vec![Value::Int(1), Value::Int(2)]);
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn unknown_token_fails_at_load() {
    let err = eval("3 4≬").unwrap_err();
    assert!(matches!(
        err.kind,
        sigil_foundation::ErrorKind::UnknownToken(_)
    ));
}

#[test]
fn type_mismatch_is_reported() {
    // Calling a non-function.
    let err = eval("5†").unwrap_err();
    assert!(matches!(
        err.kind,
        sigil_foundation::ErrorKind::TypeMismatch { .. }
    ));
}

#[test]
fn underflow_is_reported() {
    let err = eval("1+").unwrap_err();
    assert!(matches!(
        err.kind,
        sigil_foundation::ErrorKind::Underflow { needed: 2, depth: 1 }
    ));
}
