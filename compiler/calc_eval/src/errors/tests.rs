use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    let undefined = EvalError::UndefinedFunction { name: "f".into() };
    assert_eq!(undefined.to_string(), "call to undefined function f");

    let too_few = EvalError::TooFewArguments {
        name: "g".into(),
        expected: 2,
        found: 1,
    };
    assert_eq!(
        too_few.to_string(),
        "too few args in call to g: expected 2, got 1"
    );

    let unknown = EvalError::UnknownBuiltin {
        id: BuiltinId::from_raw(9),
    };
    assert_eq!(unknown.to_string(), "unknown built-in function 9");
}

#[test]
fn diagnostics_carry_codes() {
    let diag = EvalError::UndefinedFunction { name: "f".into() }.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.line, None);
    assert!(!diag.is_fatal());
}
