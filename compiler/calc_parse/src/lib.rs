//! Recursive descent parser for calc.
//!
//! The parser works one line at a time so that a host can evaluate each
//! statement before the next is parsed: definitions take effect
//! immediately, and a REPL can prompt between lines. Names are resolved
//! against the caller's [`SymbolTable`] as they are parsed.
//!
//! Syntax errors are reported and the rest of the line is discarded (the
//! classic `error EOL` recovery). Characters that start no token are
//! reported and skipped without disturbing the surrounding statement.

mod cursor;
mod error;
mod grammar;
mod statement;

pub use error::ParseError;
pub use statement::{ParsedLine, Statement};

use calc_ir::SymbolTable;
use tracing::debug;

use crate::cursor::Cursor;

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::starting_at_line(source, 1)
    }

    /// Parser whose first source line is numbered `first_line`.
    pub fn starting_at_line(source: &'src str, first_line: u32) -> Self {
        Parser {
            cursor: Cursor::new(source, first_line),
        }
    }

    /// Whether all input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Parse the next line that produced a statement or an error.
    ///
    /// Blank lines are skipped. Returns `None` once the input is exhausted.
    /// After a fatal error the parser stops and every later call returns
    /// `None`.
    pub fn next_line(&mut self, symbols: &mut SymbolTable) -> Option<ParsedLine> {
        loop {
            if self.cursor.is_at_end() {
                let errors = self.cursor.take_lexical_errors();
                return (!errors.is_empty()).then(|| ParsedLine {
                    errors,
                    statement: None,
                });
            }

            let result = self.parse_line(symbols);
            let mut parsed = ParsedLine {
                errors: self.cursor.take_lexical_errors(),
                statement: None,
            };
            match result {
                Ok(statement) => parsed.statement = statement,
                Err(error) if error.is_fatal() => {
                    parsed.errors.push(error);
                    self.stop();
                    return Some(parsed);
                }
                Err(error) => {
                    debug!(line = error.line(), %error, "skipping to next line");
                    self.cursor.recover_to_line_end();
                    // Anything skipped during recovery is still reported.
                    parsed.errors.push(error);
                    parsed.errors.append(&mut self.cursor.take_lexical_errors());
                }
            }

            if parsed.statement.is_some() || !parsed.errors.is_empty() {
                return Some(parsed);
            }
        }
    }

    fn stop(&mut self) {
        while !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        self.cursor.take_lexical_errors();
    }
}

/// Everything parsed from one source text.
#[derive(Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Statement>,
    pub errors: Vec<ParseError>,
}

/// Parse a whole source text up front.
///
/// Useful when nothing needs to run between lines; hosts that evaluate as
/// they go should drive [`Parser::next_line`] instead.
pub fn parse(source: &str, symbols: &mut SymbolTable) -> ParseOutput {
    let mut parser = Parser::new(source);
    let mut output = ParseOutput::default();
    while let Some(parsed) = parser.next_line(symbols) {
        output.errors.extend(parsed.errors);
        output.statements.extend(parsed.statement);
    }
    output
}
