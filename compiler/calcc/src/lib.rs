//! Host for the calc interpreter.
//!
//! Ties the front end ([`calc_parse`]) to the evaluator ([`calc_eval`]):
//! each top-level statement is parsed, optionally dumped, evaluated,
//! printed as `= value` and torn down before the next one is read. The
//! `calc` binary is a thin argument parser over [`Session`] and
//! [`run_repl`].

mod error;
mod repl;
mod session;
mod tracing_setup;

pub use error::CalcError;
pub use repl::run_repl;
pub use session::{Session, SessionOptions};
pub use tracing_setup::init_tracing;
