//! Lexer (tokenizer) for C0 source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Construction runs a comment-stripping pre-pass over the whole
//! buffer, so no token boundary can ever fall inside a `//` or `/* ... */`
//! comment; [`Lexer::next_token`] then produces one token per call from the
//! stripped text.
//!
//! Lexical problems (illegal characters, unterminated literals, unterminated
//! block comments) are recorded as [`Diagnostic`]s and surface in the token
//! stream as `Unknown` tokens rather than aborting the scan.

use crate::diagnostics::Diagnostic;
use crate::source::{SourceBuffer, SourceLocation};
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::Path;

/// All token variants produced by the lexer.
///
/// Integer and boolean literals carry their decoded values; string and char
/// literals carry their decoded text as the token lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    KwInt,
    KwBool,
    KwChar,
    KwString,
    KwVoid,
    KwStruct,
    KwTypedef,
    KwIf,
    KwElse,
    KwWhile,
    KwDo,
    KwFor,
    KwReturn,
    KwBreak,
    KwContinue,
    KwAssert,
    KwNull,
    KwAlloc,
    KwAllocArray,

    // Identifiers
    Identifier,

    // Literals
    IntLiteral(i32),
    BoolLiteral(bool),
    StringLiteral,
    CharLiteral,

    // Operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Assign,  // =
    EqEq,    // ==
    NotEq,   // !=
    Lt,      // <
    Gt,      // >
    Le,      // <=
    Ge,      // >=
    AndAnd,  // &&
    OrOr,    // ||
    Bang,    // !
    Amp,     // &
    Pipe,    // |
    Caret,   // ^

    // Compound assignment
    PlusEq,    // +=
    MinusEq,   // -=
    StarEq,    // *=
    SlashEq,   // /=
    PercentEq, // %=

    // Delimiters
    Semicolon, // ;
    Comma,     // ,
    Dot,       // .
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Sentinels
    Eof,
    Unknown,
}

impl TokenKind {
    /// Discriminant-level equality; literal payloads are ignored, so any
    /// `IntLiteral` matches any other.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::KwInt => write!(f, "'int'"),
            TokenKind::KwBool => write!(f, "'bool'"),
            TokenKind::KwChar => write!(f, "'char'"),
            TokenKind::KwString => write!(f, "'string'"),
            TokenKind::KwVoid => write!(f, "'void'"),
            TokenKind::KwStruct => write!(f, "'struct'"),
            TokenKind::KwTypedef => write!(f, "'typedef'"),
            TokenKind::KwIf => write!(f, "'if'"),
            TokenKind::KwElse => write!(f, "'else'"),
            TokenKind::KwWhile => write!(f, "'while'"),
            TokenKind::KwDo => write!(f, "'do'"),
            TokenKind::KwFor => write!(f, "'for'"),
            TokenKind::KwReturn => write!(f, "'return'"),
            TokenKind::KwBreak => write!(f, "'break'"),
            TokenKind::KwContinue => write!(f, "'continue'"),
            TokenKind::KwAssert => write!(f, "'assert'"),
            TokenKind::KwNull => write!(f, "'NULL'"),
            TokenKind::KwAlloc => write!(f, "'alloc'"),
            TokenKind::KwAllocArray => write!(f, "'alloc_array'"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntLiteral(n) => write!(f, "int literal {}", n),
            TokenKind::BoolLiteral(b) => write!(f, "bool literal {}", b),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::CharLiteral => write!(f, "char literal"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Le => write!(f, "'<='"),
            TokenKind::Ge => write!(f, "'>='"),
            TokenKind::AndAnd => write!(f, "'&&'"),
            TokenKind::OrOr => write!(f, "'||'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Amp => write!(f, "'&'"),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Caret => write!(f, "'^'"),
            TokenKind::PlusEq => write!(f, "'+='"),
            TokenKind::MinusEq => write!(f, "'-='"),
            TokenKind::StarEq => write!(f, "'*='"),
            TokenKind::SlashEq => write!(f, "'/='"),
            TokenKind::PercentEq => write!(f, "'%='"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Unknown => write!(f, "unknown token"),
        }
    }
}

/// One lexical unit: kind, the literal source text, and where it started.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    /// The end-of-file sentinel; also synthesized by the parser for any
    /// lookahead past the end of the token vector.
    pub fn eof(location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            location,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.lexeme),
            TokenKind::CharLiteral => write!(f, "char literal '{}'", self.lexeme),
            TokenKind::Unknown => write!(f, "unknown token '{}'", self.lexeme),
            _ => write!(f, "{}", self.kind),
        }
    }
}

fn keyword_table() -> FxHashMap<&'static str, TokenKind> {
    let mut keywords = FxHashMap::default();
    keywords.insert("int", TokenKind::KwInt);
    keywords.insert("bool", TokenKind::KwBool);
    keywords.insert("char", TokenKind::KwChar);
    keywords.insert("string", TokenKind::KwString);
    keywords.insert("void", TokenKind::KwVoid);
    keywords.insert("struct", TokenKind::KwStruct);
    keywords.insert("typedef", TokenKind::KwTypedef);
    keywords.insert("if", TokenKind::KwIf);
    keywords.insert("else", TokenKind::KwElse);
    keywords.insert("while", TokenKind::KwWhile);
    keywords.insert("do", TokenKind::KwDo);
    keywords.insert("for", TokenKind::KwFor);
    keywords.insert("return", TokenKind::KwReturn);
    keywords.insert("break", TokenKind::KwBreak);
    keywords.insert("continue", TokenKind::KwContinue);
    keywords.insert("assert", TokenKind::KwAssert);
    keywords.insert("NULL", TokenKind::KwNull);
    keywords.insert("alloc", TokenKind::KwAlloc);
    keywords.insert("alloc_array", TokenKind::KwAllocArray);
    // true/false decode straight to literal tokens
    keywords.insert("true", TokenKind::BoolLiteral(true));
    keywords.insert("false", TokenKind::BoolLiteral(false));
    keywords
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' | '\0')
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '!' | '<' | '>' | '&' | '|' | '^'
    )
}

fn is_delimiter_char(c: char) -> bool {
    matches!(c, ';' | ',' | '(' | ')' | '{' | '}' | '.')
}

fn two_char_operator(spelling: &str) -> Option<TokenKind> {
    match spelling {
        "==" => Some(TokenKind::EqEq),
        "!=" => Some(TokenKind::NotEq),
        "<=" => Some(TokenKind::Le),
        ">=" => Some(TokenKind::Ge),
        "&&" => Some(TokenKind::AndAnd),
        "||" => Some(TokenKind::OrOr),
        "+=" => Some(TokenKind::PlusEq),
        "-=" => Some(TokenKind::MinusEq),
        "*=" => Some(TokenKind::StarEq),
        "/=" => Some(TokenKind::SlashEq),
        "%=" => Some(TokenKind::PercentEq),
        _ => None,
    }
}

fn single_char_operator(c: char) -> TokenKind {
    match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '=' => TokenKind::Assign,
        '!' => TokenKind::Bang,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '&' => TokenKind::Amp,
        '|' => TokenKind::Pipe,
        '^' => TokenKind::Caret,
        _ => TokenKind::Unknown,
    }
}

fn delimiter(c: char) -> TokenKind {
    match c {
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        _ => TokenKind::Unknown,
    }
}

/// Phase one of lexing: copy the buffer with all comments removed.
///
/// `//` consumes to the next newline (the newline itself survives, keeping
/// line numbers aligned); `/* ... */` consumes to the first `*/` with no
/// nesting. An unterminated block comment consumes to end of input and is
/// reported. The stripped text is installed back into the buffer and the
/// cursor reset, so tokenization never sees a comment character.
fn strip_comments(buffer: &mut SourceBuffer, diagnostics: &mut Vec<Diagnostic>) {
    let mut stripped = Vec::new();

    while !buffer.at_end() {
        if buffer.peek() == '/' && buffer.peek_ahead(1) == '/' {
            buffer.advance();
            buffer.advance();
            while !buffer.at_end() && buffer.peek() != '\n' {
                buffer.advance();
            }
        } else if buffer.peek() == '/' && buffer.peek_ahead(1) == '*' {
            let start = buffer.location();
            buffer.advance();
            buffer.advance();
            let mut closed = false;
            while !buffer.at_end() {
                if buffer.peek() == '*' && buffer.peek_ahead(1) == '/' {
                    buffer.advance();
                    buffer.advance();
                    closed = true;
                    break;
                }
                buffer.advance();
            }
            if !closed {
                diagnostics.push(Diagnostic::lexical("unterminated block comment", start));
            }
        } else {
            stripped.push(buffer.advance());
        }
    }

    buffer.replace_contents(stripped);
    buffer.reset();
}

/// Lexer for C0 source text.
pub struct Lexer {
    buffer: SourceBuffer,
    keywords: FxHashMap<&'static str, TokenKind>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Build a lexer over a file's contents. Fails only on IO errors.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(SourceBuffer::from_file(path)?))
    }

    /// Build a lexer over source text the caller already holds.
    pub fn from_source(source: &str) -> Self {
        Self::new(SourceBuffer::from_source(source))
    }

    /// Take ownership of a buffer and run the comment pre-pass over it.
    pub fn new(mut buffer: SourceBuffer) -> Self {
        let mut diagnostics = Vec::new();
        strip_comments(&mut buffer, &mut diagnostics);
        Self {
            buffer,
            keywords: keyword_table(),
            diagnostics,
        }
    }

    /// Lexical diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the recorded diagnostics (the parser adopts them this way).
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Produce the next token. Once end of input is reached every further
    /// call returns the end-of-file token again.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let location = self.buffer.location();
        if self.buffer.eof_reached() {
            return Token::eof(location);
        }

        let c = self.buffer.peek();

        if c.is_ascii_digit() {
            return self.read_number();
        }
        if is_ident_start(c) {
            return self.read_keyword_or_identifier();
        }
        if is_operator_char(c) {
            return self.read_operator();
        }
        if is_delimiter_char(c) {
            return self.read_delimiter();
        }
        if c == '"' {
            return self.read_string();
        }
        if c == '\'' {
            return self.read_char();
        }

        let ch = self.buffer.advance();
        self.diagnostics.push(Diagnostic::lexical(
            format!("illegal character '{}'", ch.escape_default()),
            location,
        ));
        Token {
            kind: TokenKind::Unknown,
            lexeme: ch.to_string(),
            location,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.buffer.eof_reached() {
            if is_whitespace(self.buffer.peek()) {
                self.buffer.advance();
            } else {
                break;
            }
        }
    }

    /// Maximal run of decimal digits. No sign, no hex, no floating point:
    /// `123 456` lexes as two tokens.
    fn read_number(&mut self) -> Token {
        let location = self.buffer.location();
        let mut lexeme = String::new();

        while self.buffer.peek().is_ascii_digit() {
            lexeme.push(self.buffer.advance());
        }

        match lexeme.parse::<i32>() {
            Ok(value) => Token {
                kind: TokenKind::IntLiteral(value),
                lexeme,
                location,
            },
            Err(_) => {
                self.diagnostics.push(Diagnostic::lexical(
                    format!("integer literal '{}' out of range", lexeme),
                    location,
                ));
                Token {
                    kind: TokenKind::Unknown,
                    lexeme,
                    location,
                }
            }
        }
    }

    /// Maximal identifier run, then an exact-spelling keyword table lookup.
    /// `int_variable` is an identifier; `int` is always the keyword.
    fn read_keyword_or_identifier(&mut self) -> Token {
        let location = self.buffer.location();
        let mut word = String::new();

        while is_ident_continue(self.buffer.peek()) {
            word.push(self.buffer.advance());
        }

        let kind = match self.keywords.get(word.as_str()) {
            Some(kind) => kind.clone(),
            None => TokenKind::Identifier,
        };

        Token {
            kind,
            lexeme: word,
            location,
        }
    }

    /// Two-character spellings are tried before the one-character fallback,
    /// so `<=` never splits into `<` `=`.
    fn read_operator(&mut self) -> Token {
        let location = self.buffer.location();
        let first = self.buffer.peek();
        let second = self.buffer.peek_ahead(1);

        let mut spelling = String::new();
        spelling.push(first);
        spelling.push(second);

        if let Some(kind) = two_char_operator(&spelling) {
            self.buffer.advance();
            self.buffer.advance();
            return Token {
                kind,
                lexeme: spelling,
                location,
            };
        }

        self.buffer.advance();
        Token {
            kind: single_char_operator(first),
            lexeme: first.to_string(),
            location,
        }
    }

    fn read_delimiter(&mut self) -> Token {
        let location = self.buffer.location();
        let c = self.buffer.advance();
        Token {
            kind: delimiter(c),
            lexeme: c.to_string(),
            location,
        }
    }

    /// `"..."` with `\n`, `\t`, `\"` escapes decoded and any other escaped
    /// character passed through. A raw newline or end of input before the
    /// closing quote aborts the literal into an `Unknown` token.
    fn read_string(&mut self) -> Token {
        let location = self.buffer.location();
        self.buffer.advance(); // opening quote
        let mut value = String::new();

        loop {
            if self.buffer.at_end() {
                self.diagnostics
                    .push(Diagnostic::lexical("unterminated string literal", location));
                return Token {
                    kind: TokenKind::Unknown,
                    lexeme: value,
                    location,
                };
            }

            let ch = self.buffer.advance();
            match ch {
                '"' => {
                    return Token {
                        kind: TokenKind::StringLiteral,
                        lexeme: value,
                        location,
                    };
                }
                '\n' => {
                    self.diagnostics.push(Diagnostic::lexical(
                        "string literal may not contain a raw newline",
                        location,
                    ));
                    return Token {
                        kind: TokenKind::Unknown,
                        lexeme: value,
                        location,
                    };
                }
                '\\' => {
                    if self.buffer.at_end() {
                        continue; // loop head reports the unterminated literal
                    }
                    let escaped = self.buffer.advance();
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        '"' => value.push('"'),
                        other => value.push(other),
                    }
                }
                other => value.push(other),
            }
        }
    }

    /// `'c'`: exactly one character between quotes, no escape handling.
    fn read_char(&mut self) -> Token {
        let location = self.buffer.location();
        self.buffer.advance(); // opening quote

        if self.buffer.at_end() {
            self.diagnostics
                .push(Diagnostic::lexical("unterminated character literal", location));
            return Token {
                kind: TokenKind::Unknown,
                lexeme: String::new(),
                location,
            };
        }

        let value = self.buffer.advance();

        if self.buffer.peek() != '\'' || self.buffer.at_end() {
            self.diagnostics
                .push(Diagnostic::lexical("unterminated character literal", location));
            return Token {
                kind: TokenKind::Unknown,
                lexeme: value.to_string(),
                location,
            };
        }

        self.buffer.advance(); // closing quote
        Token {
            kind: TokenKind::CharLiteral,
            lexeme: value.to_string(),
            location,
        }
    }
}
