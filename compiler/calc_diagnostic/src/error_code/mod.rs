//! Error codes for all interpreter diagnostics.
//!
//! Format: E#### where the first digit is the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors
//! - E6xxx: Runtime / eval errors
//! - E9xxx: Fatal interpreter errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Character that starts no token
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1004,
    /// Input ended inside a statement
    E1005,

    // Runtime Errors (E6xxx)
    /// Call to a symbol with no function body
    E6001,
    /// Fewer actual arguments than formal parameters
    E6002,
    /// Built-in id outside the known set
    E6003,

    // Fatal Errors (E9xxx)
    /// Symbol table overflow
    E9001,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Fatal codes terminate the host; everything else is reported and
    /// evaluation continues.
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
