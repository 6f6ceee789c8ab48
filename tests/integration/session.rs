//! Session behavior across program fragments.

use sigil_foundation::Value;
use sigil_language::{Env, FixedClock, Timestamp};
use sigil_runtime::Session;

#[test]
fn stack_persists_between_lines() {
    let mut session = Session::new().unwrap();
    session.eval("1 2 3").unwrap();
    session.eval("+").unwrap();
    let top = session.eval("*").unwrap();
    assert_eq!(top, Some(Value::Int(5)));
}

#[test]
fn register_persists_between_lines() {
    let mut session = Session::new().unwrap();
    session.eval("42£").unwrap();
    assert_eq!(session.eval("¥").unwrap(), Some(Value::Int(42)));
}

#[test]
fn lambda_from_earlier_line_still_resolves() {
    let mut session = Session::new().unwrap();
    session.eval("λ² ›;").unwrap();
    session.eval("7$").unwrap();
    assert_eq!(session.eval("†").unwrap(), Some(Value::Int(50)));
}

#[test]
fn errors_leave_prior_state_alone() {
    let mut session = Session::new().unwrap();
    session.eval("1 2").unwrap();
    assert!(session.eval("≬").is_err()); // unknown token
    assert_eq!(session.eval("+").unwrap(), Some(Value::Int(3)));
}

#[test]
fn seeded_env_gives_reproducible_randomness() {
    let mut a = Session::new().unwrap();
    a.set_env(Env::new().with_seed(7));
    let ra = a.eval("10ɾÞ℅").unwrap();

    let mut b = Session::new().unwrap();
    b.set_env(Env::new().with_seed(7));
    let rb = b.eval("10ɾÞ℅").unwrap();

    assert_eq!(ra, rb);
}

#[test]
fn pinned_clock_drives_date_constants() {
    // 2024-02-29 23:59:59 UTC (leap day).
    let ts = Timestamp::from_epoch(1_709_251_199, 1_709_251_199.0);
    let mut session = Session::new().unwrap();
    session.set_env(Env::new().with_clock(Box::new(FixedClock(ts))));
    assert_eq!(
        session.eval("kD").unwrap(),
        Some(Value::from("2024-02-29"))
    );
    assert_eq!(session.eval("kτ").unwrap(), Some(Value::Int(60)));
}

#[test]
fn printed_output_is_flushed_per_fragment() {
    let mut session = Session::new().unwrap();
    session.eval("1, 2,").unwrap();
    assert_eq!(session.take_output(), "1\n2\n");
    session.eval("3,").unwrap();
    assert_eq!(session.take_output(), "3\n");
}
