use super::*;
use pretty_assertions::assert_eq;

#[test]
fn number_kind_round_trips_bits() {
    let kind = TokenKind::number(-0.0);
    assert_eq!(kind.as_number().map(f64::to_bits), Some((-0.0f64).to_bits()));
    assert_eq!(TokenKind::Name.as_number(), None);
}

#[test]
fn statement_starters() {
    assert!(TokenKind::If.starts_statement());
    assert!(TokenKind::Pipe.starts_statement());
    assert!(TokenKind::Func(BuiltinId::SQRT).starts_statement());
    assert!(!TokenKind::Else.starts_statement());
    assert!(!TokenKind::Semicolon.starts_statement());
    assert!(!TokenKind::Eol.starts_statement());
}

#[test]
fn display_names() {
    assert_eq!(TokenKind::Cmp(CmpOp::Ne).to_string(), "<>");
    assert_eq!(TokenKind::Func(BuiltinId::LOG).to_string(), "log");
    assert_eq!(TokenKind::Func(BuiltinId::from_raw(9)).to_string(), "built-in function");
    assert_eq!(TokenKind::Eol.to_string(), "end of line");
}

#[test]
fn span_from_range() {
    assert_eq!(Span::from(3..7), Span::new(3, 7));
    assert_eq!(Span::point(4), Span::new(4, 4));
}
