//! Host-level failures.

use std::io;

use calc_parse::ParseError;

/// Conditions that end a run with a failure exit status.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("error reading input: {0}")]
    Input(#[from] io::Error),

    /// A fatal front-end error (symbol table overflow). Already reported
    /// through the session's emitter.
    #[error("{0}")]
    Fatal(ParseError),
}
