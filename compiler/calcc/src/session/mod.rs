//! One interpreter session: a symbol table plus the output and diagnostic
//! sinks every statement shares.

use calc_diagnostic::DiagnosticEmitter;
use calc_eval::{InterpreterBuilder, SharedPrintHandler};
use calc_ir::{dump_tree, format_g, treefree, Node, SymbolRef, SymbolTable};
use calc_parse::{Parser, Statement};
use tracing::{debug, trace};

use crate::CalcError;

/// Host settings.
#[derive(Copy, Clone, Debug)]
pub struct SessionOptions {
    /// Dump each statement's tree before evaluating it.
    pub debug: bool,
    /// Symbol table capacity.
    pub capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            debug: false,
            capacity: SymbolTable::DEFAULT_CAPACITY,
        }
    }
}

/// Symbol table and sinks that outlive individual statements.
///
/// Values and function definitions persist across calls to
/// [`Session::run_source`], and so does line numbering.
pub struct Session<E> {
    symbols: SymbolTable,
    output: SharedPrintHandler,
    emitter: E,
    options: SessionOptions,
    /// Line number of the next chunk's first line.
    next_line: u32,
    error_count: usize,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(options: SessionOptions, output: SharedPrintHandler, emitter: E) -> Self {
        Session {
            symbols: SymbolTable::with_capacity(options.capacity),
            output,
            emitter,
            options,
            next_line: 1,
            error_count: 0,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn output(&self) -> &SharedPrintHandler {
        &self.output
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Diagnostics reported so far, fatal ones included.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Parse and run every statement in `source`.
    ///
    /// Recoverable errors are reported and skipped. A fatal error is
    /// reported, stops the run and is returned.
    pub fn run_source(&mut self, source: &str) -> Result<(), CalcError> {
        let mut parser = Parser::starting_at_line(source, self.next_line);
        self.next_line = self.next_line.saturating_add(count_lines(source));

        while let Some(parsed) = parser.next_line(&mut self.symbols) {
            for error in parsed.errors {
                self.error_count += 1;
                self.emitter.emit(&error.to_diagnostic());
                if error.is_fatal() {
                    self.emitter.flush();
                    return Err(CalcError::Fatal(error));
                }
            }
            if let Some(statement) = parsed.statement {
                self.run_statement(statement);
            }
        }
        self.emitter.flush();
        Ok(())
    }

    fn run_statement(&mut self, statement: Statement) {
        match statement {
            Statement::Expr { line, node } => self.run_expr(line, node),
            Statement::Define {
                line,
                name,
                params,
                body,
            } => self.define(line, name, params, body),
        }
    }

    fn run_expr(&mut self, line: u32, node: Box<Node>) {
        if self.options.debug {
            self.output.print(&dump_tree(&node, &self.symbols));
        }

        let mut interpreter = InterpreterBuilder::new(&self.symbols)
            .print_handler(self.output.clone())
            .emitter(&mut self.emitter)
            .line(line)
            .build();
        let value = interpreter.eval(&node);
        self.error_count += interpreter.error_count();
        drop(interpreter);

        self.output.println(&format!("= {:>4}", format_g(value, 4)));
        let kind = node.kind_name();
        let released = treefree(node);
        trace!(line, kind, released, "statement done");
    }

    fn define(
        &mut self,
        line: u32,
        name: SymbolRef,
        params: Vec<SymbolRef>,
        body: Option<Box<Node>>,
    ) {
        let released = self.symbols.define_function(name, params, body);
        let name = self.symbols[name].name();
        debug!(line, name, released_nodes = released.nodes, "definition");
        self.output.println(&format!("Defined {name}"));
    }
}

/// Newlines in `source`, saturating at `u32::MAX`.
fn count_lines(source: &str) -> u32 {
    u32::try_from(source.bytes().filter(|&b| b == b'\n').count()).unwrap_or(u32::MAX)
}
