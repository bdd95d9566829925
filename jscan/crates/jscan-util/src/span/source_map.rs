//! Source map for managing source files and computing source locations.
//!
//! This module provides the [`SourceMap`] type for managing multiple source files
//! and computing line/column information from byte offsets.

use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A resolved, human-readable position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCol {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

/// A source file with its content and metadata
///
/// Content is kept as raw bytes: the lexer treats input as an opaque byte
/// buffer and never requires it to be valid UTF-8.
///
/// # Examples
///
/// ```
/// use jscan_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.js", b"a\nbc".to_vec());
/// assert_eq!(file.name(), "main.js");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_text(2).unwrap(), b"bc");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolve a byte offset to a line and column.
    ///
    /// The offset one past the last byte (end of input) is valid.
    ///
    /// # Errors
    ///
    /// [`SourceMapError::OffsetOutOfBounds`] if `offset` is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use jscan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "x.js", b"ab\ncd".to_vec());
    /// let pos = file.line_col(4).unwrap();
    /// assert_eq!((pos.line, pos.column), (2, 2));
    /// ```
    pub fn line_col(&self, offset: usize) -> SourceMapResult<LineCol> {
        if offset > self.content.len() {
            return Err(SourceMapError::OffsetOutOfBounds {
                offset,
                file_len: self.content.len(),
            });
        }

        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = String::from_utf8_lossy(&self.content[line_start..offset])
            .chars()
            .count()
            + 1;

        Ok(LineCol { line, column })
    }

    /// Get the text of a line (1-based), without its line terminator.
    ///
    /// # Errors
    ///
    /// [`SourceMapError::InvalidLineNumber`] for line 0 or a line past the end.
    pub fn line_text(&self, line: usize) -> SourceMapResult<&[u8]> {
        if line == 0 || line > self.line_count() {
            return Err(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            });
        }

        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .map_or(self.content.len(), |&next| next - 1);
        let text = &self.content[start..end];
        Ok(text.strip_suffix(b"\r").unwrap_or(text))
    }
}

/// Collection of source files addressed by [`FileId`].
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its identifier
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(id, name, content));
        FileId(id)
    }

    /// Look up a file
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    /// Look up a file, reporting a missing one as an error
    pub fn file(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.get(id).ok_or(SourceMapError::FileNotFound(id.0))
    }

    /// Iterate over all files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files have been added
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
