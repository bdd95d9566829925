//! Error handling module for the jscant CLI.
//!
//! Lexical errors are rendered as diagnostics on stderr before they are
//! wrapped here, so the variants only carry what `main` needs to report.

use thiserror::Error;

/// Main error type for the jscant CLI application.
#[derive(Error, Debug)]
pub enum JscantError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input path cannot be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A source file failed to tokenize.
    #[error("{path}: {message}")]
    Lex {
        /// Display name of the offending input
        path: String,
        /// Lexer message, without position
        message: String,
    },

    /// One or more inputs of a `check` run failed.
    #[error("{0} file(s) failed to tokenize")]
    FilesFailed(usize),
}

/// Result type alias using JscantError.
pub type Result<T> = std::result::Result<T, JscantError>;
