//! # Introduction
//!
//! `c0front` is the front end of a compiler for C0, a small C-like teaching
//! language: it turns raw source text into an abstract syntax tree of
//! declarations, statements, and expressions, collecting lexical and syntax
//! diagnostics along the way instead of stopping at the first problem.
//!
//! ## Pipeline
//!
//! ```text
//! Source → SourceBuffer → Lexer → token vector → Parser → TranslationUnit
//! ```
//!
//! 1. [`source`] — owns the file contents and the character cursor with
//!    line/column tracking.
//! 2. [`parser::lexer`] — strips comments in a pre-pass, then produces one
//!    token per call.
//! 3. [`parser`] — materializes the full token vector and builds the tree by
//!    recursive descent, with precedence climbing for infix operators.
//! 4. [`parser::ast`] — the four closed node families and the tag-based
//!    `isa`/`try_narrow`/`narrow` utility for working with them.
//! 5. [`diagnostics`] — collected, renderable error reports.
//!
//! Parsing is single-threaded and synchronous: one file in, one
//! [`parser::ast::TranslationUnit`] plus diagnostics out. Only an IO failure
//! aborts the pipeline; malformed source yields a best-effort partial tree.

pub mod diagnostics;
pub mod parser;
pub mod source;

use std::io;
use std::path::Path;

pub use parser::parse::{ParseOutcome, Parser};

/// Parse one C0 source file. Fails only with an IO error; everything else
/// is reported through the outcome's diagnostic list.
pub fn parse_file(path: impl AsRef<Path>) -> io::Result<ParseOutcome> {
    Ok(Parser::from_file(path)?.parse())
}
