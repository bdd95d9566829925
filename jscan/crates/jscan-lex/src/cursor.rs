//! Byte cursor for traversing source buffers.
//!
//! The lexer works on raw bytes: non-ASCII bytes are opaque identifier
//! characters, so there is no UTF-8 decoding here. The cursor owns the only
//! line counter, and every byte it moves over is checked for `\n`. Any
//! construct that spans lines (block comments, strings, regex bodies,
//! template literals, even whitespace) is therefore counted the same way.

use crate::chars::is_space;

/// A position in a borrowed byte buffer, with the current 1-based line.
///
/// The cursor is `Copy`: lookahead works on a copy and never disturbs the
/// committed position.
///
/// # Example
///
/// ```
/// use jscan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"a\nb");
/// assert_eq!(cursor.first(), Some(b'a'));
/// cursor.advance_bytes(2);
/// assert_eq!(cursor.position(), 2);
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.first(), Some(b'b'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, on line 1.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// The whole buffer this cursor walks.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Number of unconsumed bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    /// The unconsumed part of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.source[self.position.min(self.source.len())..]
    }

    /// Byte at `offset` from the current position, or `None` past the end.
    ///
    /// A NUL byte inside the buffer is an ordinary byte; only running off
    /// the end yields `None`.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.rest().get(offset).copied()
    }

    /// Byte at the current position.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Moves forward by up to `len` bytes, counting newlines.
    ///
    /// The move is clamped to the end of the buffer. Returns the number of
    /// bytes actually consumed.
    pub fn advance_bytes(&mut self, len: usize) -> usize {
        let len = len.min(self.remaining());
        let consumed = &self.rest()[..len];
        let newlines = consumed.iter().filter(|&&b| b == b'\n').count();
        self.line = self.line.saturating_add(newlines as u32);
        self.position += len;
        len
    }

    /// Skips whitespace (the C-locale `isspace` set), counting newlines.
    ///
    /// Returns the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let len = self.rest().iter().take_while(|&&b| is_space(b)).count();
        self.advance_bytes(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new(b"abc");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new(b"");
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.rest(), b"");
    }

    #[test]
    fn test_peek_past_end() {
        let cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(1), Some(b'b'));
        assert_eq!(cursor.peek(2), None);
    }

    #[test]
    fn test_nul_is_a_byte() {
        let cursor = Cursor::new(b"\0x");
        assert_eq!(cursor.first(), Some(0));
        assert_ne!(cursor.remaining(), 0);
    }

    #[test]
    fn test_advance_clamps() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(cursor.advance_bytes(10), 3);
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.advance_bytes(1), 0);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_counts_every_newline() {
        let mut cursor = Cursor::new(b"/* \n \n */x");
        cursor.advance_bytes(9);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.first(), Some(b'x'));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(b" \t\r\n\x0b\x0c\nfoo");
        assert_eq!(cursor.skip_whitespace(), 7);
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.first(), Some(b'f'));
        assert_eq!(cursor.skip_whitespace(), 0);
    }

    #[test]
    fn test_copy_does_not_disturb_original() {
        let cursor = Cursor::new(b"  :");
        let mut probe = cursor;
        probe.skip_whitespace();
        assert_eq!(probe.first(), Some(b':'));
        assert_eq!(cursor.position(), 0);
    }
}
