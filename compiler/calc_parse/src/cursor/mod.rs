//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead, consumption and line-level
//! recovery. Error tokens from the lexer never reach the grammar: the cursor
//! steps over them and records a [`ParseError::MysteryCharacter`] for each.

use std::mem;

use calc_lexer::{lex_from_line, Token, TokenKind, TokenList};

use crate::ParseError;

pub struct Cursor<'src> {
    source: &'src str,
    tokens: TokenList,
    pos: usize,
    /// Mystery characters stepped over since the last `take_lexical_errors`.
    lexical_errors: Vec<ParseError>,
}

impl<'src> Cursor<'src> {
    /// Lex `source`, numbering lines from `first_line`, and position the
    /// cursor on its first token.
    pub fn new(source: &'src str, first_line: u32) -> Self {
        let mut cursor = Cursor {
            source,
            tokens: lex_from_line(source, first_line),
            pos: 0,
            lexical_errors: Vec::new(),
        };
        cursor.skip_error_tokens();
        cursor
    }

    /// Get the current token.
    ///
    /// Invariant: the last token is always EOF and the cursor never moves
    /// past it.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.as_slice()[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_line(&self) -> u32 {
        self.current().line
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind exactly.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Source text of `token`.
    pub fn text(&self, token: Token) -> &'src str {
        &self.source[token.span.start..token.span.end]
    }

    /// Consume the current token and return it. At EOF this is a no-op
    /// that returns the EOF token.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            self.skip_error_tokens();
        }
        token
    }

    /// Consume a token of the given kind or fail without moving.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Error for finding the current token where `expected` was required.
    #[cold]
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        match token.kind {
            TokenKind::Eof => ParseError::UnexpectedEnd { line: token.line },
            found => ParseError::UnexpectedToken {
                expected,
                found,
                line: token.line,
            },
        }
    }

    /// Discard tokens up to and including the next end of line.
    pub fn recover_to_line_end(&mut self) {
        loop {
            match self.advance().kind {
                TokenKind::Eol | TokenKind::Eof => return,
                _ => {}
            }
        }
    }

    /// Drain the mystery characters seen so far.
    pub fn take_lexical_errors(&mut self) -> Vec<ParseError> {
        mem::take(&mut self.lexical_errors)
    }

    fn skip_error_tokens(&mut self) {
        while self.current_kind() == TokenKind::Error {
            let token = self.current();
            self.lexical_errors.push(ParseError::MysteryCharacter {
                text: self.text(token).to_owned(),
                line: token.line,
            });
            self.pos += 1;
        }
    }
}
