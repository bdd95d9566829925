//! Lexical errors.
//!
//! Every error carries the byte offset and line where it was detected.
//! Errors are fatal for the token stream: the lexer does no recovery, and
//! retrying at the same position reports the same error.

use jscan_util::{DiagnosticCode, Span};
use thiserror::Error;

use crate::context::ContextError;

/// Error returned by the lexer.
#[derive(Debug, Error)]
pub enum LexError {
    /// An opener would exceed the nesting limit.
    #[error("nesting deeper than {limit} levels at line {line}")]
    NestingOverflow {
        /// Byte offset of the opener
        offset: usize,
        /// Line of the opener
        line: u32,
        /// Configured maximum depth
        limit: usize,
    },

    /// A closer with no open level.
    #[error("unmatched closing bracket at line {line}")]
    NestingUnderflow {
        /// Byte offset of the closer
        offset: usize,
        /// Line of the closer
        line: u32,
    },

    /// End of input with levels still open.
    #[error("end of input with {depth} unclosed bracket(s) at line {line}")]
    UnbalancedAtEof {
        /// Byte offset of the end of input
        offset: usize,
        /// Line of the end of input
        line: u32,
        /// Number of levels still open
        depth: usize,
    },

    /// No token starts at this position.
    #[error("unexpected byte at line {line}")]
    Classification {
        /// Byte offset of the unexpected byte
        offset: usize,
        /// Line of the unexpected byte
        line: u32,
    },

    /// The value-context query failed while classifying `/`.
    #[error("value-context query failed at line {line}: {source}")]
    ContextQuery {
        /// Byte offset of the slash
        offset: usize,
        /// Line of the slash
        line: u32,
        /// The error returned by the query
        #[source]
        source: ContextError,
    },

    /// `update` called with no token to relabel.
    #[error("no token to relabel at line {line}")]
    StaleUpdate {
        /// Current byte offset
        offset: usize,
        /// Current line
        line: u32,
    },
}

impl LexError {
    /// Byte offset where the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            LexError::NestingOverflow { offset, .. }
            | LexError::NestingUnderflow { offset, .. }
            | LexError::UnbalancedAtEof { offset, .. }
            | LexError::Classification { offset, .. }
            | LexError::ContextQuery { offset, .. }
            | LexError::StaleUpdate { offset, .. } => offset,
        }
    }

    /// Line where the error was detected.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::NestingOverflow { line, .. }
            | LexError::NestingUnderflow { line, .. }
            | LexError::UnbalancedAtEof { line, .. }
            | LexError::Classification { line, .. }
            | LexError::ContextQuery { line, .. }
            | LexError::StaleUpdate { line, .. } => line,
        }
    }

    /// Span to highlight in a diagnostic.
    ///
    /// Points at the offending byte, or is empty at end of input.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnbalancedAtEof { offset, .. } | LexError::StaleUpdate { offset, .. } => {
                Span::point(*offset)
            },
            other => Span::new(other.offset(), 1),
        }
    }

    /// Stable diagnostic code for this error.
    ///
    /// # Example
    ///
    /// ```
    /// use jscan_lex::LexError;
    /// use jscan_util::DiagnosticCode;
    ///
    /// let err = LexError::NestingUnderflow { offset: 0, line: 1 };
    /// assert_eq!(err.code(), DiagnosticCode::E0002);
    /// ```
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::NestingOverflow { .. } => DiagnosticCode::E0001,
            LexError::NestingUnderflow { .. } => DiagnosticCode::E0002,
            LexError::UnbalancedAtEof { .. } => DiagnosticCode::E0003,
            LexError::Classification { .. } => DiagnosticCode::E0004,
            LexError::ContextQuery { .. } => DiagnosticCode::E0005,
            LexError::StaleUpdate { .. } => DiagnosticCode::E0006,
        }
    }

    /// Short message without position, for rendered diagnostics.
    pub fn message(&self) -> String {
        match self {
            LexError::NestingOverflow { limit, .. } => {
                format!("nesting deeper than {} levels", limit)
            },
            LexError::NestingUnderflow { .. } => "unmatched closing bracket".to_string(),
            LexError::UnbalancedAtEof { depth, .. } => {
                format!("end of input with {} unclosed bracket(s)", depth)
            },
            LexError::Classification { .. } => "unexpected byte".to_string(),
            LexError::ContextQuery { source, .. } => {
                format!("value-context query failed: {}", source)
            },
            LexError::StaleUpdate { .. } => "no token to relabel".to_string(),
        }
    }
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
