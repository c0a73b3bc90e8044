use super::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_with_line() {
    let diag = Diagnostic::error(ErrorCode::E6001, "call to undefined function f").with_line(Some(3));
    assert_eq!(diag.to_string(), "3: error: call to undefined function f");
}

#[test]
fn renders_without_line() {
    let diag = Diagnostic::error(ErrorCode::E6003, "unknown built-in function 9");
    assert_eq!(diag.line, None);
    assert_eq!(diag.to_string(), "error: unknown built-in function 9");
}

#[test]
fn fatality_follows_code() {
    assert!(Diagnostic::error(ErrorCode::E9001, "overflow").is_fatal());
    assert!(!Diagnostic::error(ErrorCode::E6002, "too few").is_fatal());
}
