//! Calc IR - the data model of the calc interpreter.
//!
//! This crate contains everything the evaluator walks and everything the
//! front end builds:
//! - [`SymbolTable`]: fixed-capacity, open-addressed store of named scalar
//!   slots, each optionally bound to a user function
//! - [`Node`]: the owned expression/statement tree
//! - [`builder`]: one constructor per node kind
//! - [`treefree`]: recursive teardown of an owned tree
//! - [`dump_tree`]: indented debug rendering of a tree
//! - [`format_g`]: C-style `%.Ng` rendering of scalars
//!
//! # Ownership
//!
//! Every subtree has exactly one owner (its parent `Box`). References to
//! variables and functions are [`SymbolRef`] handles into the table, never
//! ownership edges, so tearing down a tree never touches symbol storage.

mod ast;
pub mod builder;
mod dump;
mod format;
mod symbol;
mod teardown;

pub use ast::{BinaryOp, Builtin, BuiltinId, CmpOp, Node};
pub use dump::dump_tree;
pub use format::format_g;
pub use symbol::{hash_symbol, Released, Symbol, SymbolRef, SymbolTable, SymbolTableError};
pub use teardown::treefree;
