//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the materialized token vector, cursor helpers, the
//! [`ParseError`] type, and the recovery machinery that turns errors into
//! collected diagnostics.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing struct, function, and variable declarations
//! - `statements`: Parsing statements (if, while, for, etc.)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared parser state.
//!
//! # Error handling
//!
//! Internal parse routines return `Result<_, ParseError>` and propagate with
//! `?`. Errors never escape [`Parser::parse`]: the statement loop inside a
//! compound statement and the top-level declaration loop catch them, record
//! a diagnostic, resynchronize to the next statement boundary, and continue.
//! The result is a best-effort partial tree plus the ordered diagnostic
//! list; the caller decides whether to go on to later stages.

use crate::diagnostics::Diagnostic;
use crate::parser::ast::{TokenSpan, TranslationUnit};
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::source::SourceLocation;
use std::fmt;
use std::io;
use std::path::Path;

/// Error produced when a parse routine cannot make progress.
///
/// These are internal: recovery points convert them into [`Diagnostic`]s
/// before `parse` returns.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at {}: {}", self.location, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic::syntax(err.message, err.location)
    }
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Everything one parse produces: the best-effort tree and the lexical and
/// syntax diagnostics collected along the way, in order of discovery.
#[derive(Debug)]
pub struct ParseOutcome {
    pub unit: TranslationUnit,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// True when no diagnostics were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Recursive descent parser for the C0 grammar subset.
///
/// Construction runs the lexer to exhaustion, materializing the full token
/// vector (including the single trailing end-of-file token) before any
/// parsing begins, trading streaming for unlimited index-based lookahead.
/// The cursor only ever moves forward.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    eof_token: Token,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Lex and parse a source file. Fails only with an IO error; lexical
    /// and syntax problems surface as diagnostics on the [`ParseOutcome`].
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::with_lexer(Lexer::from_file(path)?))
    }

    /// Build a parser over source text the caller already holds.
    pub fn from_source(source: &str) -> Self {
        Self::with_lexer(Lexer::from_source(source))
    }

    fn with_lexer(mut lexer: Lexer) -> Self {
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        let end_location = match tokens.last() {
            Some(token) => token.location,
            None => SourceLocation::start(),
        };

        Self {
            tokens,
            position: 0,
            eof_token: Token::eof(end_location),
            diagnostics: lexer.take_diagnostics(),
        }
    }

    /// Parse the whole translation unit.
    ///
    /// Top-level declarations are parsed until the token vector is
    /// exhausted; a declaration that fails is reported and skipped.
    pub fn parse(mut self) -> ParseOutcome {
        let start = self.position;
        let location = self.peek(0).location;

        let mut declarations = Vec::new();
        while !self.at_end() {
            match self.parse_declaration() {
                Ok(decl) => declarations.push(decl),
                Err(err) => {
                    self.report(err);
                    let stalled = self.position;
                    self.synchronize();
                    if self.position == stalled {
                        // stray token (e.g. an unmatched '}'), step over it
                        self.advance();
                    }
                }
            }
        }

        let unit = TranslationUnit {
            declarations,
            span: self.span_from(start),
            location,
        };
        ParseOutcome {
            unit,
            diagnostics: self.diagnostics,
        }
    }

    // ===== Cursor helpers =====

    /// Token at `cursor + k`, or the synthesized end-of-file token when the
    /// index runs past the vector.
    pub(crate) fn peek(&self, k: usize) -> &Token {
        self.tokens.get(self.position + k).unwrap_or(&self.eof_token)
    }

    pub(crate) fn peek_kind(&self, k: usize) -> &TokenKind {
        &self.peek(k).kind
    }

    /// Consume and return the current token. Past the end this returns the
    /// end-of-file token and leaves the cursor where it is.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek(0).clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(0), TokenKind::Eof)
    }

    /// True if the current token has the given kind (payloads ignored).
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind(0).same_kind(kind)
    }

    /// Consume the current token and return true only if it matches.
    pub(crate) fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with "expected `what`".
    pub(crate) fn expect(&mut self, kind: &TokenKind, what: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("expected {}, found {}", what, self.peek(0))))
        }
    }

    pub(crate) fn expect_identifier(&mut self, what: &str) -> ParseResult<Token> {
        self.expect(&TokenKind::Identifier, what)
    }

    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.peek(0).location)
    }

    /// Half-open token range from `start` to the current cursor.
    pub(crate) fn span_from(&self, start: usize) -> TokenSpan {
        TokenSpan::new(start, self.position)
    }

    pub(crate) fn cursor(&self) -> usize {
        self.position
    }

    pub(crate) fn report(&mut self, err: ParseError) {
        self.diagnostics.push(err.into());
    }

    /// Skip to the next statement boundary: just past a `;` at the current
    /// brace depth, or in front of a closing `}` (left for the enclosing
    /// block to consume), or end of input.
    pub(crate) fn synchronize(&mut self) {
        let mut depth = 0usize;
        while !self.at_end() {
            match self.peek_kind(0).clone() {
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_vector_ends_in_single_eof() {
        let parser = Parser::from_source("int x = 1;");
        let eofs = parser.tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1);
        assert!(parser.tokens.last().is_some_and(Token::is_eof));
    }

    #[test]
    fn test_peek_past_end_synthesizes_eof() {
        let parser = Parser::from_source("x");
        assert!(parser.peek(100).is_eof());
    }

    #[test]
    fn test_empty_input_parses_to_empty_unit() {
        let outcome = Parser::from_source("").parse();
        assert!(outcome.is_clean());
        assert!(outcome.unit.declarations.is_empty());
    }

    #[test]
    fn test_synchronize_stops_past_semicolon() {
        let mut parser = Parser::from_source("a b ; c");
        parser.synchronize();
        assert_eq!(parser.peek(0).lexeme, "c");
    }

    #[test]
    fn test_synchronize_stops_before_closing_brace() {
        let mut parser = Parser::from_source("a { ; } b }");
        parser.synchronize();
        // the inner braces are skipped whole; the stray '}' is left alone
        assert!(matches!(parser.peek_kind(0), TokenKind::RBrace));
    }
}
