//! Expression parsing implementation
//!
//! This module handles parsing of C0 expressions using precedence climbing
//! for infix operators and recursive descent for prefix, postfix, and
//! primary forms.
//!
//! # Precedence table (low to high)
//!
//! ```text
//! 1  = += -= *= /= %=   (right-associative)
//! 2  ||                 (right-associative)
//! 3  &&                 (right-associative)
//! 4  == !=
//! 5  < > <= >=
//! 6  + -
//! 7  * / %
//! ```
//!
//! Every other token has precedence 0, meaning "not an infix operator";
//! that is what terminates the climb. Prefix `+ - !` chain freely, postfix
//! call parentheses and `.member` access bind tightest, and `'(' type ')'`
//! is recognized as a cast with three tokens of fixed lookahead; the
//! parser never backtracks.

use crate::parser::ast::{
    AssignmentExpr, BinaryExpr, BoolLiteralExpr, CallExpr, CastExpr, CharLiteralExpr, Expr,
    IdentifierExpr, IntLiteralExpr, MemberAccessExpr, StringLiteralExpr, UnaryExpr,
};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseResult, Parser};

/// Infix binding power; 0 marks "not an infix operator".
fn infix_precedence(kind: &TokenKind) -> u8 {
    match kind {
        TokenKind::Assign
        | TokenKind::PlusEq
        | TokenKind::MinusEq
        | TokenKind::StarEq
        | TokenKind::SlashEq
        | TokenKind::PercentEq => 1,
        TokenKind::OrOr => 2,
        TokenKind::AndAnd => 3,
        TokenKind::EqEq | TokenKind::NotEq => 4,
        TokenKind::Lt | TokenKind::Gt | TokenKind::Le | TokenKind::Ge => 5,
        TokenKind::Plus | TokenKind::Minus => 6,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 7,
        _ => 0,
    }
}

fn is_right_associative(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Assign
            | TokenKind::PlusEq
            | TokenKind::MinusEq
            | TokenKind::StarEq
            | TokenKind::SlashEq
            | TokenKind::PercentEq
            | TokenKind::AndAnd
            | TokenKind::OrOr
            | TokenKind::Caret
    )
}

/// `=` and the compound assignments build [`AssignmentExpr`] nodes; every
/// other infix operator builds a [`BinaryExpr`].
fn is_assignment_operator(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Assign
            | TokenKind::PlusEq
            | TokenKind::MinusEq
            | TokenKind::StarEq
            | TokenKind::SlashEq
            | TokenKind::PercentEq
    )
}

impl Parser {
    /// Precedence climbing: parse a prefix operand, then fold infix
    /// operators whose precedence is at least `min_prec`. Right-associative
    /// operators recurse at the same precedence, left-associative ones at
    /// precedence + 1.
    pub(crate) fn parse_expression(&mut self, min_prec: u8) -> ParseResult<Expr> {
        let start = self.cursor();
        let mut left = self.parse_prefix_expression()?;

        loop {
            let prec = infix_precedence(self.peek_kind(0));
            if prec == 0 || prec < min_prec {
                break;
            }

            let next_min_prec = if is_right_associative(self.peek_kind(0)) {
                prec
            } else {
                prec + 1
            };

            let op_token = self.advance();
            let right = self.parse_expression(next_min_prec)?;
            let span = self.span_from(start);

            left = if is_assignment_operator(&op_token.kind) {
                Expr::Assignment(AssignmentExpr {
                    left: Box::new(left),
                    right: Box::new(right),
                    op: op_token.kind,
                    span,
                    location: op_token.location,
                })
            } else {
                Expr::Binary(BinaryExpr {
                    left: Box::new(left),
                    right: Box::new(right),
                    op: op_token.kind,
                    span,
                    location: op_token.location,
                })
            };
        }

        Ok(left)
    }

    /// Prefix `+ - !`, recursing so chains like `- -x` and `!!x` nest.
    fn parse_prefix_expression(&mut self) -> ParseResult<Expr> {
        match self.peek_kind(0).clone() {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang => {
                let start = self.cursor();
                let op_token = self.advance();
                let operand = self.parse_prefix_expression()?;
                Ok(Expr::Unary(UnaryExpr {
                    operand: Box::new(operand),
                    op: op_token.kind,
                    prefix: true,
                    span: self.span_from(start),
                    location: op_token.location,
                }))
            }
            _ => self.parse_cast_expression(),
        }
    }

    /// `'(' type ')' operand`, distinguished from a parenthesized
    /// expression by two extra tokens of lookahead: type names are single
    /// keywords in this grammar, so `(` `type` `)` is decisive.
    fn parse_cast_expression(&mut self) -> ParseResult<Expr> {
        if matches!(self.peek_kind(0), TokenKind::LParen)
            && Self::is_type_specifier(self.peek_kind(1))
            && matches!(self.peek_kind(2), TokenKind::RParen)
        {
            let start = self.cursor();
            let lparen = self.advance();
            let type_token = self.advance();
            self.advance(); // ')'
            let operand = self.parse_prefix_expression()?;
            return Ok(Expr::Cast(CastExpr {
                type_name: type_token.lexeme,
                operand: Box::new(operand),
                span: self.span_from(start),
                location: lparen.location,
            }));
        }

        self.parse_postfix_expression()
    }

    /// Postfix operators applied greedily: call parentheses (so `f()()`
    /// chains with the inner call as callee) and `.member` access.
    fn parse_postfix_expression(&mut self) -> ParseResult<Expr> {
        let start = self.cursor();
        let mut expr = self.parse_primary_expression()?;

        loop {
            match self.peek_kind(0).clone() {
                TokenKind::LParen => {
                    let lparen = self.advance();
                    let mut arguments = Vec::new();
                    if !self.check(&TokenKind::RParen) {
                        loop {
                            arguments.push(self.parse_expression(0)?);
                            if !self.match_kind(&TokenKind::Comma) {
                                break;
                            }
                        }
                    }
                    self.expect(&TokenKind::RParen, "')' after call arguments")?;
                    expr = Expr::Call(CallExpr {
                        callee: Box::new(expr),
                        arguments,
                        span: self.span_from(start),
                        location: lparen.location,
                    });
                }
                TokenKind::Dot => {
                    let dot = self.advance();
                    let member = self.expect_identifier("member name after '.'")?;
                    expr = Expr::MemberAccess(MemberAccessExpr {
                        base: Box::new(expr),
                        member: member.lexeme,
                        arrow: false,
                        span: self.span_from(start),
                        location: dot.location,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// Literals, identifiers, and parenthesized sub-expressions.
    fn parse_primary_expression(&mut self) -> ParseResult<Expr> {
        let start = self.cursor();

        match self.peek_kind(0).clone() {
            TokenKind::IntLiteral(value) => {
                let token = self.advance();
                Ok(Expr::IntLiteral(IntLiteralExpr {
                    value,
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::BoolLiteral(value) => {
                let token = self.advance();
                Ok(Expr::BoolLiteral(BoolLiteralExpr {
                    value,
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::StringLiteral => {
                let token = self.advance();
                Ok(Expr::StringLiteral(StringLiteralExpr {
                    value: token.lexeme,
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::CharLiteral => {
                let token = self.advance();
                let value = token.lexeme.chars().next().unwrap_or('\0');
                Ok(Expr::CharLiteral(CharLiteralExpr {
                    value,
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Identifier(IdentifierExpr {
                    name: token.lexeme,
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression(0)?;
                self.expect(&TokenKind::RParen, "')' after parenthesized expression")?;
                Ok(expr)
            }
            _ => Err(self.error_here(format!("expected expression, found {}", self.peek(0)))),
        }
    }
}
