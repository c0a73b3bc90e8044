//! `InterpreterBuilder` for configuring where an interpreter's output goes.

use calc_diagnostic::{DiagnosticEmitter, TerminalEmitter};
use calc_ir::SymbolTable;

use super::Interpreter;
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: `print` goes to stdout, diagnostics to stderr, no source line.
pub struct InterpreterBuilder<'a> {
    symbols: &'a SymbolTable,
    print_handler: Option<SharedPrintHandler>,
    emitter: Option<Box<dyn DiagnosticEmitter + 'a>>,
    line: Option<u32>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        InterpreterBuilder {
            symbols,
            print_handler: None,
            emitter: None,
            line: None,
        }
    }

    /// Set the print handler for `print` output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the diagnostic emitter. Accepts `&mut E` to keep ownership with
    /// the caller.
    #[must_use]
    pub fn emitter(mut self, emitter: impl DiagnosticEmitter + 'a) -> Self {
        self.emitter = Some(Box::new(emitter));
        self
    }

    /// Set the initial source line for diagnostics.
    #[must_use]
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            symbols: self.symbols,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            emitter: self
                .emitter
                .unwrap_or_else(|| Box::new(TerminalEmitter::stderr())),
            line: self.line,
            error_count: 0,
        }
    }
}
