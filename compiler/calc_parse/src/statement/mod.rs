//! Parser output.

use calc_ir::{Node, SymbolRef};

/// One top-level statement, ready for the host to run.
#[derive(Debug, PartialEq)]
pub enum Statement {
    /// A statement to evaluate and print.
    Expr { line: u32, node: Box<Node> },
    /// `let name(params) = body`
    Define {
        line: u32,
        name: SymbolRef,
        params: Vec<SymbolRef>,
        /// `None` for an empty statement list.
        body: Option<Box<Node>>,
    },
}

impl Statement {
    /// Line the statement starts on.
    pub fn line(&self) -> u32 {
        match self {
            Statement::Expr { line, .. } | Statement::Define { line, .. } => *line,
        }
    }
}

/// Everything the parser produced for one input line.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedLine {
    /// Errors in source order. A syntax error means `statement` is `None`.
    pub errors: Vec<crate::ParseError>,
    pub statement: Option<Statement>,
}

impl ParsedLine {
    /// A fatal error means no further lines can be parsed.
    pub fn is_fatal(&self) -> bool {
        self.errors.iter().any(crate::ParseError::is_fatal)
    }
}
