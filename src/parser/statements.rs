//! Statement parsing implementation
//!
//! This module handles parsing of all C0 statement forms:
//!
//! - Compound statements: `{ ... }` (with per-statement error recovery)
//! - Control flow: `if`/`else`, `while`, `for`, `do`-`while`
//! - Jumps: `return`, `break`, `continue`
//! - Declarations in statement position, chosen by type-specifier lookahead
//! - Expression statements and the bare-`;` null statement
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{
    BreakStmt, CompoundStmt, ContinueStmt, Decl, DeclStmt, DoWhileStmt, ExpressionStmt, ForStmt,
    IfStmt, NullStmt, ReturnStmt, Stmt, WhileStmt,
};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseResult, Parser};

impl Parser {
    /// Dispatch on the lookahead token kind.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.peek_kind(0).clone() {
            TokenKind::LBrace => self.parse_compound_statement(),
            TokenKind::KwIf => self.parse_if_statement(),
            TokenKind::KwWhile => self.parse_while_statement(),
            TokenKind::KwFor => self.parse_for_statement(),
            TokenKind::KwDo => self.parse_do_while_statement(),
            TokenKind::KwBreak => {
                let start = self.cursor();
                let token = self.advance();
                self.expect(&TokenKind::Semicolon, "';' after 'break'")?;
                Ok(Stmt::Break(BreakStmt {
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::KwContinue => {
                let start = self.cursor();
                let token = self.advance();
                self.expect(&TokenKind::Semicolon, "';' after 'continue'")?;
                Ok(Stmt::Continue(ContinueStmt {
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            TokenKind::KwReturn => self.parse_return_statement(),
            TokenKind::Semicolon => {
                let start = self.cursor();
                let token = self.advance();
                Ok(Stmt::Null(NullStmt {
                    span: self.span_from(start),
                    location: token.location,
                }))
            }
            kind if Self::is_type_specifier(&kind) => self.parse_decl_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `'{' statement* '}'` with per-statement recovery: a failed statement
    /// is reported, the cursor resynchronized, and the block continues.
    pub(crate) fn parse_compound_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let lbrace = self.expect(&TokenKind::LBrace, "'{'")?;

        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.report(err);
                    self.synchronize();
                }
            }
        }

        self.expect(&TokenKind::RBrace, "'}' after block")?;

        Ok(Stmt::Compound(CompoundStmt {
            statements,
            span: self.span_from(start),
            location: lbrace.location,
        }))
    }

    /// `if '(' expr ')' stmt ('else' stmt)?`
    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let if_token = self.advance();

        self.expect(&TokenKind::LParen, "'(' after 'if'")?;
        let condition = self.parse_expression(0)?;
        self.expect(&TokenKind::RParen, "')' after if condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_kind(&TokenKind::KwElse) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: self.span_from(start),
            location: if_token.location,
        }))
    }

    /// `while '(' expr ')' stmt`
    fn parse_while_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let while_token = self.advance();

        self.expect(&TokenKind::LParen, "'(' after 'while'")?;
        let condition = self.parse_expression(0)?;
        self.expect(&TokenKind::RParen, "')' after while condition")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            span: self.span_from(start),
            location: while_token.location,
        }))
    }

    /// `for '(' init ';' condition? ';' increment? ')' stmt`
    ///
    /// The init clause is empty, a declaration, or an expression statement,
    /// chosen by the same type-specifier lookahead as statement dispatch. A
    /// declaration consumes its own `;` terminator; the other two forms
    /// expect one here.
    fn parse_for_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let for_token = self.advance();

        self.expect(&TokenKind::LParen, "'(' after 'for'")?;

        let init = if self.match_kind(&TokenKind::Semicolon) {
            None
        } else if Self::is_type_specifier(self.peek_kind(0)) {
            let decl_start = self.cursor();
            let decl = self.parse_variable_declaration()?;
            let location = decl.location;
            Some(Box::new(Stmt::Decl(DeclStmt {
                declaration: Decl::Variable(decl),
                span: self.span_from(decl_start),
                location,
            })))
        } else {
            let expr_start = self.cursor();
            let expression = self.parse_expression(0)?;
            self.expect(&TokenKind::Semicolon, "';' after for initializer")?;
            let location = expression.location();
            Some(Box::new(Stmt::Expression(ExpressionStmt {
                expression,
                span: self.span_from(expr_start),
                location,
            })))
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        self.expect(&TokenKind::Semicolon, "';' after for condition")?;

        let increment = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        self.expect(&TokenKind::RParen, "')' after for clauses")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::For(ForStmt {
            init,
            condition,
            increment,
            body,
            span: self.span_from(start),
            location: for_token.location,
        }))
    }

    /// `do stmt while '(' expr ')' ';'`
    fn parse_do_while_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let do_token = self.advance();

        let body = Box::new(self.parse_statement()?);

        self.expect(&TokenKind::KwWhile, "'while' after do body")?;
        self.expect(&TokenKind::LParen, "'(' after 'while'")?;
        let condition = self.parse_expression(0)?;
        self.expect(&TokenKind::RParen, "')' after do-while condition")?;
        self.expect(&TokenKind::Semicolon, "';' after do-while")?;

        Ok(Stmt::DoWhile(DoWhileStmt {
            body,
            condition,
            span: self.span_from(start),
            location: do_token.location,
        }))
    }

    /// `return expr? ';'`
    fn parse_return_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let return_token = self.advance();

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        self.expect(&TokenKind::Semicolon, "';' after return")?;

        Ok(Stmt::Return(ReturnStmt {
            value,
            span: self.span_from(start),
            location: return_token.location,
        }))
    }

    /// A variable declaration in statement position.
    fn parse_decl_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let decl = self.parse_variable_declaration()?;
        let location = decl.location;
        Ok(Stmt::Decl(DeclStmt {
            declaration: Decl::Variable(decl),
            span: self.span_from(start),
            location,
        }))
    }

    /// `expr ';'`
    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.cursor();
        let expression = self.parse_expression(0)?;
        self.expect(&TokenKind::Semicolon, "';' after expression")?;
        let location = expression.location();
        Ok(Stmt::Expression(ExpressionStmt {
            expression,
            span: self.span_from(start),
            location,
        }))
    }
}
