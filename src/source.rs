//! Source text management
//!
//! [`SourceBuffer`] owns the full contents of one compilation unit and exposes
//! the character-level cursor the lexer drives: peek with bounded lookahead,
//! consume with line/column tracking, and the storage swap used by the
//! comment-stripping pre-pass. The buffer is loaded whole; there is no
//! streaming and no size cap.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// NUL doubles as the end-of-input sentinel returned by [`SourceBuffer::peek`].
pub const EOF_CHAR: char = '\0';

/// A 1-based line/column position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a buffer.
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// In-memory character buffer with a forward-only cursor.
///
/// The cursor never rewinds: callers that need to look past the current
/// character use [`peek_ahead`](SourceBuffer::peek_ahead) before consuming,
/// so the tracked location is always exact.
pub struct SourceBuffer {
    chars: Vec<char>,
    pos: usize,
    location: SourceLocation,
    eof_reached: bool,
}

impl SourceBuffer {
    /// Load a source file whole. Fails with the underlying IO error if the
    /// file cannot be opened or is not valid UTF-8.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_source(&text))
    }

    /// Wrap source text that the caller already holds.
    pub fn from_source(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            location: SourceLocation::start(),
            eof_reached: false,
        }
    }

    /// Location of the character [`peek`](SourceBuffer::peek) would return.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Current character without consuming it; [`EOF_CHAR`] at end of input.
    pub fn peek(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(EOF_CHAR)
    }

    /// Character `n` positions past the cursor; [`EOF_CHAR`] when out of range.
    pub fn peek_ahead(&self, n: usize) -> char {
        self.chars.get(self.pos + n).copied().unwrap_or(EOF_CHAR)
    }

    /// Consume and return the current character, updating the location:
    /// a newline bumps the line and resets the column, anything else bumps
    /// the column. Consuming at or past the end returns [`EOF_CHAR`] and
    /// latches the end-of-input flag.
    pub fn advance(&mut self) -> char {
        if self.pos >= self.chars.len() {
            self.eof_reached = true;
            return EOF_CHAR;
        }

        let ch = self.chars[self.pos];
        self.pos += 1;

        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }

        ch
    }

    /// True once the cursor has passed the last character.
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// True once [`advance`](SourceBuffer::advance) has run past the buffer.
    pub fn eof_reached(&self) -> bool {
        self.eof_reached
    }

    /// Restore the initial cursor and location state.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.location = SourceLocation::start();
        self.eof_reached = false;
    }

    /// Swap the underlying character storage. The cursor is left where it
    /// was; callers pair this with [`reset`](SourceBuffer::reset).
    pub fn replace_contents(&mut self, chars: Vec<char>) {
        self.chars = chars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut buffer = SourceBuffer::from_source("ab");
        assert_eq!(buffer.peek(), 'a');
        assert_eq!(buffer.advance(), 'a');
        assert_eq!(buffer.peek(), 'b');
        assert_eq!(buffer.peek_ahead(1), EOF_CHAR);
        assert_eq!(buffer.advance(), 'b');
        assert_eq!(buffer.peek(), EOF_CHAR);
    }

    #[test]
    fn test_location_tracking_across_newlines() {
        let mut buffer = SourceBuffer::from_source("a\nbc");
        assert_eq!(buffer.location(), SourceLocation::new(1, 1));
        buffer.advance(); // 'a'
        assert_eq!(buffer.location(), SourceLocation::new(1, 2));
        buffer.advance(); // '\n'
        assert_eq!(buffer.location(), SourceLocation::new(2, 1));
        buffer.advance(); // 'b'
        assert_eq!(buffer.location(), SourceLocation::new(2, 2));
    }

    #[test]
    fn test_eof_flag_latches_only_after_consuming_past_end() {
        let mut buffer = SourceBuffer::from_source("x");
        buffer.advance();
        assert!(buffer.at_end());
        assert!(!buffer.eof_reached());
        assert_eq!(buffer.advance(), EOF_CHAR);
        assert!(buffer.eof_reached());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut buffer = SourceBuffer::from_source("a\nb");
        buffer.advance();
        buffer.advance();
        buffer.advance();
        buffer.advance();
        assert!(buffer.eof_reached());
        buffer.reset();
        assert!(!buffer.eof_reached());
        assert_eq!(buffer.location(), SourceLocation::start());
        assert_eq!(buffer.peek(), 'a');
    }

    #[test]
    fn test_replace_contents_swaps_storage() {
        let mut buffer = SourceBuffer::from_source("old text");
        buffer.advance();
        buffer.replace_contents(vec!['n', 'e', 'w']);
        buffer.reset();
        assert_eq!(buffer.advance(), 'n');
        assert_eq!(buffer.advance(), 'e');
        assert_eq!(buffer.advance(), 'w');
        assert!(buffer.at_end());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(SourceBuffer::from_file("/no/such/file.c0").is_err());
    }
}
