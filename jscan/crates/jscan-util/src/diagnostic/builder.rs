//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and the [`SourceSnippet`] that renders the
//! offending source line under a diagnostic header.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::span::{SourceFile, Span};

/// A single source line with a highlighted column range
///
/// # Examples
///
/// ```
/// use jscan_util::diagnostic::SourceSnippet;
/// use jscan_util::span::{SourceFile, Span};
///
/// let file = SourceFile::new(0, "x.js", b"let x = 42;".to_vec());
/// let snippet = SourceSnippet::from_span(&file, Span::new(4, 1)).unwrap();
/// assert_eq!(snippet.format(), "1 | let x = 42;\n  |     ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column one past the end of the issue (1-based)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build a snippet for `span` from the line it starts on.
    ///
    /// A span that continues past the end of its first line is highlighted
    /// up to the end of that line. Returns `None` when the span does not
    /// resolve inside `file`.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let pos = file.line_col(span.offset).ok()?;
        let text = file.line_text(pos.line).ok()?;

        let covered = span.slice(file.content());
        let first_line = covered
            .iter()
            .position(|&b| b == b'\n')
            .map_or(covered, |nl| &covered[..nl]);
        let width = String::from_utf8_lossy(first_line).chars().count();

        Some(Self {
            line: String::from_utf8_lossy(text).into_owned(),
            line_number: pos.line,
            start_column: pos.column,
            end_column: pos.column + width,
        })
    }

    /// Width of the line-number gutter
    #[inline]
    pub fn gutter_width(&self) -> usize {
        self.line_number.to_string().len()
    }

    /// Format the source line and a caret line under it.
    ///
    /// The result has no trailing newline.
    pub fn format(&self) -> String {
        let width = self.gutter_width();
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use jscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use jscan_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unbalanced brackets at end of input")
///     .code(DiagnosticCode::E0003)
///     .span(Span::point(12))
///     .help("close the open bracket")
///     .build();
/// assert_eq!(diag.code, Some(DiagnosticCode::E0003));
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use jscan_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong").emit(&handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
