//! Collected diagnostics
//!
//! Lexical and syntax problems are never thrown: the lexer and parser append
//! [`Diagnostic`]s to ordered lists that travel with their results, and the
//! caller decides what to do with a partial tree. [`Diagnostic::render`]
//! produces a colored report with one line of source context on each side of
//! the offending line.

use crate::source::SourceLocation;
use colored::Colorize;
use std::fmt;

/// Which stage produced the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

impl DiagnosticKind {
    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Lexical => "lexical error",
            DiagnosticKind::Syntax => "syntax error",
        }
    }
}

/// One reported problem, anchored to a source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn lexical(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind: DiagnosticKind::Lexical,
            message: message.into(),
            location,
        }
    }

    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            message: message.into(),
            location,
        }
    }

    /// Format the diagnostic with color and the surrounding source lines.
    ///
    /// `source` must be the same text the tokens were produced from; if the
    /// location falls outside it only the header line is emitted.
    pub fn render(&self, source: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}: {}\n",
            self.kind.label().red().bold(),
            self.message
        ));
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), self.location));

        let lines: Vec<&str> = source.lines().collect();
        if self.location.line == 0 || self.location.line > lines.len() {
            return output;
        }

        let line_idx = self.location.line - 1;
        let line_num_width = self.location.line.to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", self.location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding = " ".repeat(line_num_width + 2 + self.location.column);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.kind.label(),
            self.location,
            self.message
        )
    }
}
