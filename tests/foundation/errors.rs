//! Integration tests for error construction and rendering.

use sigil_foundation::{Error, ErrorContext, ErrorKind, Type};

#[test]
fn underflow_message() {
    let err = Error::underflow(3, 1);
    let msg = format!("{err}");
    assert!(msg.contains("underflow"));
    assert!(msg.contains('3'));
}

#[test]
fn unknown_token_message() {
    let err = Error::unknown_token("∆z");
    assert!(format!("{err}").contains("∆z"));
}

#[test]
fn type_mismatch_names_kinds() {
    let err = Error::type_mismatch(Type::Fn, Type::Num);
    let msg = format!("{err}");
    assert!(msg.contains("function"));
    assert!(msg.contains("number"));
}

#[test]
fn malformed_table_is_distinct_kind() {
    let err = Error::malformed_table("duplicate token");
    assert!(matches!(err.kind, ErrorKind::MalformedTable(_)));
}

#[test]
fn context_renders_frames() {
    let ctx = ErrorContext::new().with_token("+").with_frame("λ#2");
    let rendered = format!("{ctx}");
    assert!(rendered.contains('+'));
    assert!(rendered.contains("λ#2"));
}

#[test]
fn runtime_errors_carry_the_token() {
    let err = sigil_language::eval("1 `a`-").unwrap_err();
    let ctx = err.context.expect("command errors carry context");
    assert_eq!(ctx.token.as_deref(), Some("-"));
}
