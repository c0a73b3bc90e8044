//! Calc Eval - the evaluator of the calc interpreter.
//!
//! Maps a [`Node`](calc_ir::Node) to an `f64`, mutating the values in a
//! [`SymbolTable`](calc_ir::SymbolTable) as a side effect.
//!
//! # Architecture
//!
//! - [`Interpreter`]: recursive node dispatch, the user-function call
//!   protocol, and error reporting
//! - [`apply_builtin`]: the closed set of built-in functions
//! - `PrintHandlerImpl`: where `print` output goes
//!
//! # Scoping
//!
//! Function parameters are ordinary global symbols. A call snapshots the
//! parameters' current values, overwrites them with the evaluated arguments,
//! evaluates the body and restores the snapshot. The snapshot lives in a
//! per-call frame, so recursive and nested calls compose.
//!
//! # Errors
//!
//! Nothing here fails: a recoverable [`EvalError`] is turned into a
//! diagnostic where it is detected, and the offending expression yields
//! `0.0`.

mod builtins;
mod errors;
mod interpreter;
mod print_handler;

pub use builtins::apply_builtin;
pub use errors::EvalError;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
