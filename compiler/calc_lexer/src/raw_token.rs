//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before line
//! tracking and conversion to [`TokenKind`](crate::TokenKind).

use calc_ir::{BuiltinId, CmpOp};
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t]*\n")]
    LineContinuation,

    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("let")]
    Let,

    #[token("sqrt", |_| BuiltinId::SQRT)]
    #[token("exp", |_| BuiltinId::EXP)]
    #[token("log", |_| BuiltinId::LOG)]
    #[token("print", |_| BuiltinId::PRINT)]
    Func(BuiltinId),

    #[token(">", |_| CmpOp::Gt)]
    #[token("<", |_| CmpOp::Lt)]
    #[token("<>", |_| CmpOp::Ne)]
    #[token("==", |_| CmpOp::Eq)]
    #[token(">=", |_| CmpOp::Ge)]
    #[token("<=", |_| CmpOp::Le)]
    Cmp(CmpOp),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("|")]
    Pipe,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Decimal with optional fraction and exponent: `12`, `1.`, `1.5e-3`
    #[regex(r"[0-9]+\.?[0-9]*([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    // Leading-dot decimal: `.5`, `.5E2`
    #[regex(r"\.[0-9]+([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Name,
}
