//! Expression parsing.
//!
//! Precedence, lowest first:
//!
//! | level | operators | assoc |
//! |-------|-----------|-------|
//! | assignment | `NAME = exp` | right |
//! | comparison | `> < <> == >= <=` | left |
//! | additive | `+ -` | left |
//! | multiplicative | `* /` | left |
//! | unary | `-x`, `\|x` | prefix |
//!
//! Assignment is recognised at primary position (`NAME` followed by `=`)
//! and its right-hand side is a full expression, so `1 + x = 2 * 3` parses
//! as `1 + (x = (2 * 3))`.

use calc_ir::builder;
use calc_ir::{BinaryOp, Node, SymbolTable};
use calc_lexer::TokenKind;
use calc_stack::ensure_sufficient_stack;

use super::resolve;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    pub(crate) fn parse_exp(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        ensure_sufficient_stack(|| self.parse_comparison(symbols))
    }

    fn parse_comparison(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        let mut left = self.parse_additive(symbols)?;
        while let TokenKind::Cmp(op) = self.cursor.current_kind() {
            self.cursor.advance();
            let right = self.parse_additive(symbols)?;
            left = builder::compare(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        let mut left = self.parse_multiplicative(symbols)?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_multiplicative(symbols)?;
            left = builder::binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        let mut left = self.parse_unary(symbols)?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => return Ok(left),
            };
            self.cursor.advance();
            let right = self.parse_unary(symbols)?;
            left = builder::binary(op, left, right);
        }
    }

    fn parse_unary(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Minus => {
                self.cursor.advance();
                let operand = ensure_sufficient_stack(|| self.parse_unary(symbols))?;
                Ok(builder::neg(operand))
            }
            TokenKind::Pipe => {
                self.cursor.advance();
                let operand = ensure_sufficient_stack(|| self.parse_unary(symbols))?;
                Ok(builder::abs(operand))
            }
            _ => self.parse_primary(symbols),
        }
    }

    /// `NUMBER | NAME | NAME '=' exp | NAME '(' explist ')'
    ///  | FUNC '(' explist ')' | '(' exp ')'`
    fn parse_primary(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Number(bits) => {
                self.cursor.advance();
                Ok(builder::number(f64::from_bits(bits)))
            }
            TokenKind::Name => {
                self.cursor.advance();
                let symbol = resolve(symbols, self.cursor.text(token), token.line)?;
                match self.cursor.current_kind() {
                    TokenKind::Eq => {
                        self.cursor.advance();
                        let value = self.parse_exp(symbols)?;
                        Ok(builder::assign(symbol, value))
                    }
                    TokenKind::LParen => {
                        let args = self.parse_call_args(symbols)?;
                        Ok(builder::call(symbol, Some(args)))
                    }
                    _ => Ok(builder::reference(symbol)),
                }
            }
            TokenKind::Func(func) => {
                self.cursor.advance();
                let arg = self.parse_call_args(symbols)?;
                Ok(builder::builtin(func, arg))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_exp(symbols)?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::Eof => Err(ParseError::UnexpectedEnd { line: token.line }),
            found => Err(ParseError::ExpectedExpression {
                found,
                line: token.line,
            }),
        }
    }

    /// `'(' explist ')'`
    fn parse_call_args(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        self.cursor.expect(TokenKind::LParen)?;
        let args = self.parse_explist(symbols)?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// `explist := exp | exp ',' explist`, as a right-nested sequence.
    fn parse_explist(&mut self, symbols: &mut SymbolTable) -> Result<Box<Node>, ParseError> {
        let head = self.parse_exp(symbols)?;
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(head);
        }
        self.cursor.advance();
        let tail = ensure_sufficient_stack(|| self.parse_explist(symbols))?;
        Ok(builder::seq(head, tail))
    }
}
