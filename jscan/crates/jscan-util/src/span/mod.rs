//! Span module - Source location tracking.
//!
//! A [`Span`] is a `(offset, len)` pair into a byte buffer owned by somebody
//! else. Spans never copy source text; use [`Span::slice`] to borrow it.
//!
//! Line and column information is not stored in spans. Resolve it on demand
//! through a [`SourceFile`] (see [`SourceMap`]).
//!
//! # Examples
//!
//! ```
//! use jscan_util::span::Span;
//!
//! let source = b"foo(bar)";
//! let span = Span::new(4, 3);
//! assert_eq!(span.slice(source), b"bar");
//! assert_eq!(span.end(), 7);
//! ```

mod source_map;

pub use source_map::{LineCol, SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

/// A half-open byte range `[offset, offset + len)` into a source buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    /// Empty span at the start of the buffer.
    pub const DUMMY: Span = Span { offset: 0, len: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use jscan_util::span::Span;
    ///
    /// let span = Span::new(10, 4);
    /// assert_eq!(span.offset, 10);
    /// assert_eq!(span.len, 4);
    /// ```
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Create a zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self { offset, len: 0 }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the bytes covered by this span.
    ///
    /// A span that reaches past the end of `source` yields the part that
    /// overlaps it (possibly empty) instead of panicking.
    pub fn slice<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let start = self.offset.min(source.len());
        let end = self.end().min(source.len());
        &source[start..end]
    }
}
