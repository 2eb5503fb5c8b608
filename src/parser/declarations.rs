//! Declaration parsing implementation
//!
//! This module handles parsing of C0 declarations:
//!
//! - Struct declarations: `struct Name { members } ;`
//! - Function declarations: `type name(params) { body }`
//! - Variable declarations: `type name = init` with a context-sensitive
//!   terminator, reused for parameters, struct members, and for-init
//!   clauses
//!
//! # Grammar
//!
//! ```text
//! declaration ::= struct_decl | function_decl | variable_decl
//! struct_decl ::= "struct" identifier "{" variable_decl* "}" ";"
//! function_decl ::= type identifier "(" param_list ")" compound_stmt
//! variable_decl ::= type identifier ("=" expression)? terminator?
//! ```
//!
//! Dispatch uses fixed-offset lookahead, not backtracking: a leading
//! `struct` keyword selects a struct declaration, a `(` two tokens ahead
//! selects a function, anything else is a variable. This is sufficient only
//! because the grammar has one declarator per declaration and single-token
//! type names; it is a deliberate simplification, not a general declarator
//! parser.

use crate::parser::ast::{
    try_narrow_into, CompoundStmt, Decl, FunctionDecl, StructDecl, VariableDecl,
};
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, ParseResult, Parser};

impl Parser {
    /// True for the single-token type names a declaration can start with.
    pub(crate) fn is_type_specifier(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::KwInt
                | TokenKind::KwBool
                | TokenKind::KwChar
                | TokenKind::KwString
                | TokenKind::KwVoid
        )
    }

    fn parse_type_name(&mut self) -> ParseResult<Token> {
        if Self::is_type_specifier(self.peek_kind(0)) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("expected type name, found {}", self.peek(0))))
        }
    }

    /// Parse one top-level declaration.
    pub(crate) fn parse_declaration(&mut self) -> ParseResult<Decl> {
        if self.check(&TokenKind::KwStruct) {
            return self.parse_struct_declaration();
        }
        if matches!(self.peek_kind(2), TokenKind::LParen) {
            return self.parse_function_declaration();
        }
        self.parse_variable_declaration().map(Decl::Variable)
    }

    /// `struct name '{' member* '}' ';'`. Members are variable
    /// declarations whose `;` terminator the member production consumes.
    fn parse_struct_declaration(&mut self) -> ParseResult<Decl> {
        let start = self.cursor();
        let struct_token = self.advance();
        let name = self.expect_identifier("struct name")?;
        self.expect(&TokenKind::LBrace, "'{' after struct name")?;

        let mut members = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            members.push(self.parse_variable_declaration()?);
        }

        self.expect(&TokenKind::RBrace, "'}' after struct members")?;
        self.expect(&TokenKind::Semicolon, "';' after struct declaration")?;

        Ok(Decl::Struct(StructDecl {
            name: name.lexeme,
            members,
            span: self.span_from(start),
            location: struct_token.location,
        }))
    }

    /// `type name '(' param_list ')' compound_stmt`
    fn parse_function_declaration(&mut self) -> ParseResult<Decl> {
        let start = self.cursor();
        let type_token = self.parse_type_name()?;
        let name = self.expect_identifier("function name")?;
        self.expect(&TokenKind::LParen, "'(' after function name")?;

        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            params.push(self.parse_param_declaration()?);
        }

        self.expect(&TokenKind::RParen, "')' after parameters")?;

        // The body parser yields a generic statement; narrow it to the
        // compound form the function node stores.
        let body_stmt = self.parse_compound_statement()?;
        let body = match try_narrow_into::<CompoundStmt>(body_stmt) {
            Ok(body) => body,
            Err(other) => {
                return Err(ParseError::new(
                    format!("function body must be a compound statement, found {:?}", other.kind()),
                    other.location(),
                ));
            }
        };

        Ok(Decl::Function(FunctionDecl {
            name: name.lexeme,
            return_type: type_token.lexeme,
            params,
            body,
            span: self.span_from(start),
            location: type_token.location,
        }))
    }

    /// `type name`: one parameter, with its trailing comma, when present,
    /// consumed here rather than by a dedicated list grammar.
    fn parse_param_declaration(&mut self) -> ParseResult<VariableDecl> {
        let start = self.cursor();
        let type_token = self.parse_type_name()?;
        let name = self.expect_identifier("parameter name")?;
        self.match_kind(&TokenKind::Comma);

        Ok(VariableDecl {
            name: name.lexeme,
            type_name: type_token.lexeme,
            init: None,
            span: self.span_from(start),
            location: type_token.location,
        })
    }

    /// `type name ('=' expression)?` followed by a terminator consumed only
    /// if it is `;`, `,`, or `)`, the context-sensitive ending that lets
    /// this production serve statement, member, and for-init positions
    /// without a separate grammar for each. Any other follower is reported
    /// and left for the caller.
    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult<VariableDecl> {
        let start = self.cursor();
        let type_token = self.parse_type_name()?;
        let name = self.expect_identifier("variable name")?;

        let init = if self.match_kind(&TokenKind::Assign) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        match self.peek_kind(0).clone() {
            TokenKind::Semicolon | TokenKind::Comma | TokenKind::RParen => {
                self.advance();
            }
            _ => {
                let err = self.error_here(format!(
                    "expected ';' after declaration of '{}', found {}",
                    name.lexeme,
                    self.peek(0)
                ));
                self.report(err);
            }
        }

        Ok(VariableDecl {
            name: name.lexeme,
            type_name: type_token.lexeme,
            init,
            span: self.span_from(start),
            location: type_token.location,
        })
    }
}
