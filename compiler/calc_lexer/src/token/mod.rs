//! Tokens produced by [`lex`](crate::lex).

use std::fmt;

use calc_ir::{Builtin, BuiltinId, CmpOp};

/// Byte range of a token in its source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    pub fn point(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, stored as `f64` bits so the kind stays `Eq + Hash`.
    Number(u64),
    /// Identifier; the text is the token's source slice.
    Name,
    /// Built-in function name.
    Func(BuiltinId),
    /// Comparison operator.
    Cmp(CmpOp),

    // Keywords
    If,
    Then,
    Else,
    While,
    Do,
    Let,

    // Punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Pipe,
    Comma,
    Semicolon,
    LParen,
    RParen,

    /// End of line: terminates a top-level statement.
    Eol,
    /// A character that starts no token.
    Error,
    Eof,
}

impl TokenKind {
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// The literal's value, for `Number` tokens.
    pub fn as_number(self) -> Option<f64> {
        match self {
            TokenKind::Number(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    /// Whether a statement may begin with this token.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::While
                | TokenKind::Number(_)
                | TokenKind::Name
                | TokenKind::Func(_)
                | TokenKind::LParen
                | TokenKind::Minus
                | TokenKind::Pipe
        )
    }

    /// Human-readable description for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::Name => "name",
            TokenKind::Func(id) => Builtin::from_id(id).map_or("built-in function", Builtin::name),
            TokenKind::Cmp(op) => op.as_str(),
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Let => "let",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::Pipe => "|",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eol => "end of line",
            TokenKind::Error => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based source line the token starts on.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }
}

/// The tokens of one source text, always terminated by [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, for tests and debugging.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
