//! Parse error types.
//!
//! Every variant records the source line it was detected on. Syntax errors
//! are recoverable: the parser discards the rest of the offending line and
//! carries on. Symbol table overflow is fatal.

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::SymbolTableError;
use calc_lexer::TokenKind;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("syntax error: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        line: u32,
    },

    #[error("syntax error: expected expression, found {found}")]
    ExpectedExpression { found: TokenKind, line: u32 },

    #[error("syntax error: expected name, found {found}")]
    ExpectedName { found: TokenKind, line: u32 },

    #[error("syntax error: unexpected end of input")]
    UnexpectedEnd { line: u32 },

    /// A character that starts no token. Reported, then ignored.
    #[error("mystery character '{text}'")]
    MysteryCharacter { text: String, line: u32 },

    #[error("{source}")]
    SymbolTable {
        source: SymbolTableError,
        line: u32,
    },
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { line, .. }
            | ParseError::ExpectedExpression { line, .. }
            | ParseError::ExpectedName { line, .. }
            | ParseError::UnexpectedEnd { line }
            | ParseError::MysteryCharacter { line, .. }
            | ParseError::SymbolTable { line, .. } => *line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MysteryCharacter { .. } => ErrorCode::E0002,
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseError::ExpectedName { .. } => ErrorCode::E1004,
            ParseError::UnexpectedEnd { .. } => ErrorCode::E1005,
            ParseError::SymbolTable { .. } => ErrorCode::E9001,
        }
    }

    /// Whether parsing must stop altogether.
    pub fn is_fatal(&self) -> bool {
        self.code().is_fatal()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string()).with_line(Some(self.line()))
    }
}
