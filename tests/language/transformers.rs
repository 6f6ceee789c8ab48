//! Transformer semantics.

use sigil_foundation::Value;
use sigil_language::eval;

fn ints(xs: &[i64]) -> Value {
    Value::from(xs.to_vec())
}

// =============================================================================
// Identity capture
// =============================================================================

#[test]
fn identity_capture_does_not_invoke() {
    let stack = eval("5⁽›").unwrap();
    // The 5 is untouched; the function value sits on top.
    assert_eq!(stack.len(), 2);
    assert_eq!(stack[0], Value::Int(5));
    assert!(matches!(stack[1], Value::Fn(_)));
}

#[test]
fn captured_function_can_be_invoked_later() {
    assert_eq!(eval("5⁽›†").unwrap(), vec![Value::Int(6)]);
}

// =============================================================================
// Vectorize
// =============================================================================

#[test]
fn vectorize_sequence_with_successor() {
    assert_eq!(eval("3ɾv›").unwrap(), vec![ints(&[2, 3, 4])]);
}

#[test]
fn vectorize_scalar_invokes_once() {
    assert_eq!(eval("5v›").unwrap(), vec![Value::Int(6)]);
}

#[test]
fn vectorize_with_lambda() {
    assert_eq!(eval("3ɾvλd›;").unwrap(), vec![ints(&[3, 5, 7])]);
}

#[test]
fn vectorize_zips_two_sequences() {
    assert_eq!(eval("3ɾ 3ɾṘ v*").unwrap(), vec![ints(&[3, 4, 3])]);
}

// =============================================================================
// Register apply
// =============================================================================

#[test]
fn register_apply_bypasses_the_stack() {
    let stack = eval("7&› ¥").unwrap();
    // The stack never saw the result until the recall.
    assert_eq!(stack, vec![Value::Int(8)]);
}

// =============================================================================
// Non-popping apply
// =============================================================================

#[test]
fn non_popping_apply_restores_operands() {
    assert_eq!(
        eval("3 4~+").unwrap(),
        vec![Value::Int(3), Value::Int(4), Value::Int(7)]
    );
}

#[test]
fn non_popping_unary() {
    assert_eq!(eval("5~›").unwrap(), vec![Value::Int(5), Value::Int(6)]);
}

// =============================================================================
// Conditional apply
// =============================================================================

#[test]
fn conditional_apply_runs_on_truthy() {
    assert_eq!(eval("5 1ß›").unwrap(), vec![Value::Int(6)]);
}

#[test]
fn conditional_apply_skips_on_falsy() {
    // The flag is removed; nothing else changes, no placeholder appears.
    assert_eq!(eval("5 0ß›").unwrap(), vec![Value::Int(5)]);
}

#[test]
fn conditional_apply_with_computed_flag() {
    assert_eq!(eval("10 3 4<ß›").unwrap(), vec![Value::Int(11)]);
}

// =============================================================================
// Parallel apply
// =============================================================================

#[test]
fn parallel_apply_runs_both_on_copies() {
    assert_eq!(
        eval("3 4₌+-").unwrap(),
        vec![Value::Int(7), Value::Int(-1)]
    );
}

#[test]
fn parallel_apply_pair_wraps() {
    assert_eq!(
        eval("3 4₍+*").unwrap(),
        vec![Value::pair(Value::Int(7), Value::Int(12))]
    );
}

#[test]
fn parallel_apply_mixed_arity() {
    // Successor (arity 1) sees only the top operand; + sees both.
    assert_eq!(
        eval("3 4₌›+").unwrap(),
        vec![Value::Int(5), Value::Int(7)]
    );
}
