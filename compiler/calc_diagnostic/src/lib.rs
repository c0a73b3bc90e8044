//! Diagnostics for the calc interpreter.
//!
//! Every reportable condition carries an [`ErrorCode`], a message and, when
//! the front end knows it, the source line being evaluated. Diagnostics are
//! rendered the same way by every emitter:
//!
//! ```text
//! 3: error: call to undefined function f
//! ```
//!
//! Emitters decide where they go: the terminal (stderr), a buffer (tests and
//! embedding), or nowhere.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use emitter::{BufferEmitter, DiagnosticEmitter, SilentEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
