//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are collected by a [`Handler`] and rendered against a
//! [`SourceFile`](crate::span::SourceFile) when the front end decides to show
//! them.
//!
//! ```
//! use jscan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use jscan_util::span::{SourceFile, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unmatched closing bracket")
//!     .code(DiagnosticCode::E0002)
//!     .span(Span::new(3, 1))
//!     .emit(&handler);
//!
//! let file = SourceFile::new(0, "x.js", b"a()]".to_vec());
//! let rendered = handler.diagnostics()[0].render(&file);
//! assert!(rendered.starts_with("error[E0002]: unmatched closing bracket"));
//! assert!(rendered.contains("--> x.js:1:4"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;

/// An error report with its location
///
/// Build one with [`DiagnosticBuilder`].
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic in the familiar compiler layout:
    ///
    /// ```text
    /// error[E0002]: unmatched closing bracket
    ///  --> input.js:3:6
    ///   |
    /// 3 | foo())
    ///   |      ^
    ///   = note: ...
    /// ```
    ///
    /// If the span cannot be resolved against `file` only the header,
    /// notes and helps are rendered.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("error[{}]: {}\n", code, self.message),
            None => format!("error: {}\n", self.message),
        };

        if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
            let gutter = snippet.gutter_width();
            out.push_str(&format!(
                "{:width$}--> {}:{}:{}\n",
                "",
                file.name(),
                snippet.line_number,
                snippet.start_column,
                width = gutter
            ));
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);

        DiagnosticBuilder::error("bad").emit(&handler);
        DiagnosticBuilder::error("worse").emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics()[1].message, "worse");
    }

    #[test]
    fn test_render_with_snippet() {
        let file = SourceFile::new(0, "input.js", b"let a;\nfoo())\n".to_vec());
        let diag = DiagnosticBuilder::error("unmatched closing bracket")
            .code(DiagnosticCode::E0002)
            .span(Span::new(12, 1))
            .note("no bracket is open here")
            .help("remove the bracket")
            .build();

        let rendered = diag.render(&file);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E0002]: unmatched closing bracket");
        assert_eq!(lines[1], " --> input.js:2:6");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | foo())");
        assert_eq!(lines[4], "  |      ^");
        assert_eq!(lines[5], "  = note: no bracket is open here");
        assert_eq!(lines[6], "  = help: remove the bracket");
    }

    #[test]
    fn test_render_without_resolvable_span() {
        let file = SourceFile::new(0, "input.js", b"x".to_vec());
        let diag = DiagnosticBuilder::error("lost").span(Span::new(40, 1)).build();
        assert_eq!(diag.render(&file), "error: lost\n");
    }
}
