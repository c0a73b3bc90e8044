//! Tree-walking interpreter.
//!
//! # Evaluation rules
//!
//! | node | value |
//! |------|-------|
//! | `Number(v)` | `v` |
//! | `Ref(s)` | current value of `s` |
//! | `Assign(s, e)` | `e`, also stored into `s` |
//! | `Binary` | IEEE arithmetic (`x / 0` is an infinity or NaN) |
//! | `Compare` | `1.0` if the relation holds, else `0.0` |
//! | `Abs`, `Neg` | `|e|`, `-e` |
//! | `Seq(a, b)` | `a` for effect, then `b` |
//! | `If(c, t, e)` | `t` when `c == 0`, `e` otherwise; `0.0` for a missing branch |
//! | `While(c, b)` | last value of `b` while `c != 0`; `0.0` if it never ran or `b` is absent |
//! | `Builtin(f, a)` | see [`apply_builtin`](crate::apply_builtin) |
//! | `Call(f, args)` | dynamic-scoped user call, see `call.rs` |
//!
//! `If` and `While` read truthiness in opposite directions: a zero condition
//! selects the *then* branch of an `If` but stops a `While`. Both are part of
//! the language as it exists and are kept as they are.
//!
//! Recursion depth is bounded only by memory: every step runs under
//! [`ensure_sufficient_stack`].

mod builder;
mod call;

pub use builder::InterpreterBuilder;

use calc_diagnostic::DiagnosticEmitter;
use calc_ir::{Builtin, Node, SymbolTable};
use calc_stack::ensure_sufficient_stack;
use tracing::warn;

use crate::{apply_builtin, EvalError, SharedPrintHandler};

/// Evaluates trees against a symbol table.
///
/// Holds the table by shared reference: variable values are interior
/// mutable, and function definitions cannot change while an interpreter is
/// alive.
pub struct Interpreter<'a> {
    symbols: &'a SymbolTable,
    print_handler: SharedPrintHandler,
    emitter: Box<dyn DiagnosticEmitter + 'a>,
    /// Source line attached to diagnostics.
    line: Option<u32>,
    error_count: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter printing to stdout and reporting to stderr.
    pub fn new(symbols: &'a SymbolTable) -> Self {
        InterpreterBuilder::new(symbols).build()
    }

    pub fn symbols(&self) -> &'a SymbolTable {
        self.symbols
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Set the source line reported with subsequent diagnostics.
    pub fn set_line(&mut self, line: Option<u32>) {
        self.line = line;
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Recoverable errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Evaluate `node` to a scalar.
    pub fn eval(&mut self, node: &Node) -> f64 {
        ensure_sufficient_stack(|| self.eval_node(node))
    }

    fn eval_node(&mut self, node: &Node) -> f64 {
        match node {
            Node::Number(value) => *value,
            Node::Ref(symbol) => self.symbols[*symbol].value(),
            Node::Assign { symbol, value } => {
                let value = self.eval(value);
                self.symbols[*symbol].set_value(value);
                value
            }
            Node::Binary { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);
                op.apply(left, right)
            }
            Node::Compare { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);
                if op.holds(left, right) {
                    1.0
                } else {
                    0.0
                }
            }
            Node::Abs(operand) => self.eval(operand).abs(),
            Node::Neg(operand) => -self.eval(operand),
            Node::Seq { first, second } => {
                self.eval(first);
                self.eval(second)
            }
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval(cond) == 0.0 {
                    then_branch
                } else {
                    else_branch
                };
                branch.as_deref().map_or(0.0, |branch| self.eval(branch))
            }
            Node::While { cond, body } => {
                // Without a body the condition is never evaluated.
                let Some(body) = body else {
                    return 0.0;
                };
                let mut result = 0.0;
                while self.eval(cond) != 0.0 {
                    result = self.eval(body);
                }
                result
            }
            Node::Builtin { func, arg } => {
                let value = self.eval(arg);
                match Builtin::from_id(*func) {
                    Some(builtin) => apply_builtin(builtin, value, &self.print_handler),
                    None => self.report(&EvalError::UnknownBuiltin { id: *func }),
                }
            }
            Node::Call { callee, args } => self.eval_call(*callee, args.as_deref()),
        }
    }

    /// Emit `error` as a diagnostic and yield the neutral value.
    fn report(&mut self, error: &EvalError) -> f64 {
        warn!(%error, line = ?self.line, "evaluation error");
        self.error_count += 1;
        self.emitter
            .emit(&error.to_diagnostic().with_line(self.line));
        0.0
    }
}
