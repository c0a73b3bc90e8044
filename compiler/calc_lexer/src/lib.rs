//! Lexer for calc using logos.
//!
//! Produces a [`TokenList`] where every token carries the 1-based line it
//! starts on. Newlines are significant (they end top-level statements) and
//! are kept as [`TokenKind::Eol`]; comments and backslash-newline
//! continuations are dropped but still advance the line counter.

mod raw_token;
mod token;

use logos::Logos;

use crate::raw_token::RawToken;
pub use token::{Span, Token, TokenKind, TokenList};

/// Lex source code into a `TokenList`.
///
/// Characters that start no token become [`TokenKind::Error`] tokens; lexing
/// never fails.
pub fn lex(source: &str) -> TokenList {
    lex_from_line(source, 1)
}

/// Like [`lex`], numbering lines from `first_line`. Used when a source is
/// fed in chunks (a REPL reading line by line).
pub fn lex_from_line(source: &str, first_line: u32) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);
    let mut line = first_line;

    while let Some(token_result) = logos.next() {
        let span = Span::from(logos.span());

        match token_result {
            Ok(raw) => {
                if let Some(kind) = convert_token(raw) {
                    result.push(Token::new(kind, span, line));
                }
                if matches!(raw, RawToken::Newline | RawToken::LineContinuation) {
                    line += 1;
                }
            }
            Err(()) => result.push(Token::new(TokenKind::Error, span, line)),
        }
    }

    result.push(Token::new(TokenKind::Eof, Span::point(source.len()), line));
    result
}

/// Convert a significant raw token; trivia yields `None`.
fn convert_token(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Number(value) => TokenKind::number(value),
        RawToken::Name => TokenKind::Name,
        RawToken::Func(id) => TokenKind::Func(id),
        RawToken::Cmp(op) => TokenKind::Cmp(op),

        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::Let => TokenKind::Let,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,

        RawToken::Newline => TokenKind::Eol,
        RawToken::LineComment | RawToken::LineContinuation => return None,
    };
    Some(kind)
}
