//! Table-wide properties: arity conservation, underflow atomicity, and the
//! slot-order contract for the binary arithmetic/comparison family.

use sigil_foundation::{ErrorKind, Value};
use sigil_language::{Env, Interp, Program, Tables};

fn tables() -> Tables {
    Tables::new().unwrap()
}

// =============================================================================
// Underflow atomicity, swept over every registered command
// =============================================================================

#[test]
fn underflow_never_mutates_the_stack() {
    let tables = tables();
    let program = Program::default();
    for token in tables.command_tokens() {
        let command = tables.lookup(token).unwrap();
        let arity = usize::from(command.arity());
        if arity == 0 {
            continue;
        }

        // One value short of the declared arity.
        let short: Vec<Value> = (0..arity - 1).map(|i| Value::from(i)).collect();
        let mut env = Env::new().with_seed(0);
        env.stack = short.clone();
        let mut interp = Interp::new(&mut env, &tables, &program.lambdas);
        let err = command.execute(&mut interp).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Underflow { .. }),
            "token {token:?} raised {err} instead of underflow"
        );
        assert_eq!(env.stack, short, "token {token:?} mutated the stack");
    }
}

// =============================================================================
// Arity conservation on the numeric family
// =============================================================================

#[test]
fn arity_conservation_for_numeric_commands() {
    // Commands that accept plain integers: executing against a deep stack
    // must consume exactly `arity` values below the results.
    let tables = tables();
    let program = Program::default();
    for (token, pushed) in [
        ("+", 1),
        ("-", 1),
        ("*", 1),
        ("<", 1),
        ("=", 1),
        ("›", 1),
        ("¡", 1),
        ("$", 2),
        (":", 2),
        ("ḋ", 1),
    ] {
        let command = tables.lookup(token).unwrap();
        let arity = usize::from(command.arity());

        // Two sentinel values below the operands.
        let mut stack = vec![Value::Int(90), Value::Int(91)];
        stack.extend((1..=arity).map(|i| Value::from(i)));
        let depth_before = stack.len();

        let mut env = Env::new().with_seed(0);
        env.stack = stack;
        let mut interp = Interp::new(&mut env, &tables, &program.lambdas);
        command.execute(&mut interp).unwrap();

        assert_eq!(
            env.stack.len(),
            depth_before - arity + pushed,
            "token {token:?} arity accounting"
        );
        assert_eq!(env.stack[0], Value::Int(90), "token {token:?} sentinel");
        assert_eq!(env.stack[1], Value::Int(91), "token {token:?} sentinel");
    }
}

// =============================================================================
// Slot-order contract: bottom-minus-top across the binary family
// =============================================================================

#[test]
fn binary_slot_order_is_fixed() {
    // Stack [3, 4] (4 on top): the left-hand operand is 3 for every
    // binary arithmetic/comparison command.
    for (source, expected) in [
        ("3 4-", Value::Int(-1)),
        ("3 4/", Value::Float(0.75)),
        ("3 4%", Value::Int(3)),
        ("3 4ḭ", Value::Int(0)),
        ("3 4e", Value::Int(81)),
        ("3 4<", Value::Int(1)),
        ("3 4>", Value::Int(0)),
        ("3 4≤", Value::Int(1)),
        ("3 4≥", Value::Int(0)),
        ("3 4•", Value::Float(3f64.log(4.0))),
        ("3 4ƈ", Value::Int(0)),
        ("4 3ƈ", Value::Int(4)),
        ("3 4↲", Value::Int(48)),
        ("3 4r", Value::from(vec![3i64])),
    ] {
        let got = sigil_language::eval(source).unwrap();
        assert_eq!(got.last().unwrap(), &expected, "program {source:?}");
    }
}

// =============================================================================
// Structural commands preserve the value multiset
// =============================================================================

#[test]
fn structural_commands_preserve_values() {
    use sigil_language::eval;
    assert_eq!(eval("1 2$").unwrap(), vec![Value::Int(2), Value::Int(1)]);
    assert_eq!(
        eval("1 2:").unwrap(),
        vec![Value::Int(1), Value::Int(2), Value::Int(2)]
    );
    assert_eq!(
        eval("1 2 3^").unwrap(),
        vec![Value::Int(3), Value::Int(2), Value::Int(1)]
    );
    assert_eq!(
        eval("1 2 3∇").unwrap(),
        vec![Value::Int(3), Value::Int(1), Value::Int(2)]
    );
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn fixed_stack_means_fixed_result() {
    // Two runs of the same program agree (modulo the explicitly
    // nondeterministic commands, which are excluded here).
    let source = "10ɾ:∑$Π+ 5ʀ 2ẇ ÞT f U s";
    let a = sigil_language::eval(source).unwrap();
    let b = sigil_language::eval(source).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut env_a = Env::new().with_seed(42);
    let a = sigil_language::eval_with_env("100ɾÞ℅", &mut env_a).unwrap();
    let mut env_b = Env::new().with_seed(42);
    let b = sigil_language::eval_with_env("100ɾÞ℅", &mut env_b).unwrap();
    assert_eq!(a, b);
}
