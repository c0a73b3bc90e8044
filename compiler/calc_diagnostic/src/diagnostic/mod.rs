//! The diagnostic value type.

use std::fmt;

use crate::ErrorCode;

/// A reported error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based source line, when the front end supplied one.
    pub line: Option<u32>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            line: None,
        }
    }

    /// Attach a source line.
    #[must_use]
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{line}: error: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests;
