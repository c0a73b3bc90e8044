//! Recoverable evaluation errors.

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::BuiltinId;

/// An error detected while evaluating; reported, then replaced by `0.0`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("call to undefined function {name}")]
    UndefinedFunction { name: String },

    #[error("too few args in call to {name}: expected {expected}, got {found}")]
    TooFewArguments {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown built-in function {id}")]
    UnknownBuiltin { id: BuiltinId },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UndefinedFunction { .. } => ErrorCode::E6001,
            EvalError::TooFewArguments { .. } => ErrorCode::E6002,
            EvalError::UnknownBuiltin { .. } => ErrorCode::E6003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

#[cfg(test)]
mod tests;
