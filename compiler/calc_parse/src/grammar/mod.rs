//! Statement-level grammar.
//!
//! ```text
//! line  := stmt EOL | 'let' NAME '(' symlist ')' '=' list EOL | EOL
//! stmt  := 'if' exp 'then' list [ 'else' list ] | 'while' exp 'do' list | exp
//! list  := ε | stmt ';' list
//! ```
//!
//! End of input also terminates a line, so a final statement needs no
//! trailing newline.

mod expr;

use calc_ir::builder;
use calc_ir::{Node, SymbolRef, SymbolTable};
use calc_lexer::TokenKind;
use tracing::trace;

use crate::{ParseError, Parser, Statement};

impl Parser<'_> {
    /// Parse one non-empty line, or `Ok(None)` for a blank one.
    pub(crate) fn parse_line(
        &mut self,
        symbols: &mut SymbolTable,
    ) -> Result<Option<Statement>, ParseError> {
        let line = self.cursor.current_line();
        let statement = match self.cursor.current_kind() {
            TokenKind::Eol => {
                self.cursor.advance();
                return Ok(None);
            }
            TokenKind::Let => self.parse_definition(symbols, line)?,
            _ => Statement::Expr {
                line,
                node: self.parse_stmt(symbols)?,
            },
        };
        self.expect_line_end()?;
        trace!(line, "parsed statement");
        Ok(Some(statement))
    }

    fn expect_line_end(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Eol => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.cursor.unexpected("end of line")),
        }
    }

    /// `'let' NAME '(' symlist ')' '=' list`
    fn parse_definition(
        &mut self,
        symbols: &mut SymbolTable,
        line: u32,
    ) -> Result<Statement, ParseError> {
        self.cursor.expect(TokenKind::Let)?;
        let name = self.parse_name(symbols)?;
        self.cursor.expect(TokenKind::LParen)?;
        let params = self.parse_symlist(symbols)?;
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::Eq)?;
        let body = self.parse_list(symbols)?;
        Ok(Statement::Define {
            line,
            name,
            params,
            body,
        })
    }

    /// `NAME { ',' NAME }`
    fn parse_symlist(&mut self, symbols: &mut SymbolTable) -> Result<Vec<SymbolRef>, ParseError> {
        let mut params = vec![self.parse_name(symbols)?];
        while self.cursor.check(TokenKind::Comma) {
            self.cursor.advance();
            params.push(self.parse_name(symbols)?);
        }
        Ok(params)
    }

    /// Consume a NAME token and resolve it, creating the symbol if needed.
    fn parse_name(&mut self, symbols: &mut SymbolTable) -> Result<SymbolRef, ParseError> {
        let token = self.cursor.current();
        if token.kind != TokenKind::Name {
            return Err(match token.kind {
                TokenKind::Eof => ParseError::UnexpectedEnd { line: token.line },
                found => ParseError::ExpectedName {
                    found,
                    line: token.line,
                },
            });
        }
        self.cursor.advance();
        resolve(symbols, self.cursor.text(token), token.line)
    }

    /// `'if' exp 'then' list [ 'else' list ] | 'while' exp 'do' list | exp`
    pub(crate) fn parse_stmt(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::If => {
                self.cursor.advance();
                let cond = self.parse_exp(symbols)?;
                self.cursor.expect(TokenKind::Then)?;
                let then_branch = self.parse_list(symbols)?;
                let else_branch = if self.cursor.check(TokenKind::Else) {
                    self.cursor.advance();
                    self.parse_list(symbols)?
                } else {
                    None
                };
                Ok(builder::if_else(cond, then_branch, else_branch))
            }
            TokenKind::While => {
                self.cursor.advance();
                let cond = self.parse_exp(symbols)?;
                self.cursor.expect(TokenKind::Do)?;
                let body = self.parse_list(symbols)?;
                Ok(builder::while_loop(cond, body))
            }
            _ => self.parse_exp(symbols),
        }
    }

    /// `list := ε | stmt ';' list`, folded right into a sequence. A single
    /// statement stands alone; an empty list is `None`.
    fn parse_list(&mut self, symbols: &mut SymbolTable) -> Result<Option<Box<Node>>, ParseError> {
        let mut stmts = Vec::new();
        while self.cursor.current_kind().starts_statement() {
            stmts.push(self.parse_stmt(symbols)?);
            self.cursor.expect(TokenKind::Semicolon)?;
        }
        Ok(stmts
            .into_iter()
            .rev()
            .fold(None, |tail, head| Some(builder::cons(head, tail))))
    }
}

/// Look `name` up, creating the symbol on first sight.
fn resolve(symbols: &mut SymbolTable, name: &str, line: u32) -> Result<SymbolRef, ParseError> {
    symbols
        .lookup(name)
        .map_err(|source| ParseError::SymbolTable { source, line })
}
