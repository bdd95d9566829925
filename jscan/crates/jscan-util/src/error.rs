//! Core error types for jscan-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: index {0}")]
    FileNotFound(usize),

    /// Byte offset past the end of the file
    #[error("Offset out of bounds: file has {file_len} bytes, offset is {offset}")]
    OffsetOutOfBounds {
        /// Requested byte offset
        offset: usize,
        /// Length of the file in bytes
        file_len: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
