//! Token definitions.
//!
//! A [`Token`] never owns text: it is a [`Span`] into the buffer the lexer
//! borrows, plus a [`TokenKind`] and the line the token starts on.

use std::fmt;

use jscan_util::Span;

/// The closed set of token kinds.
///
/// Keywords are not distinguished from identifiers at this layer; both are
/// [`TokenKind::Lit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input (zero length)
    Eof,
    /// Identifier-like literal: names, keywords, `true`, `null`
    Lit,
    /// `;`
    Semicolon,
    /// Operator run such as `+`, `===`, `>>>=`, `&&`
    Op,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `{`
    Brace,
    /// `[`
    Array,
    /// `(`
    Paren,
    /// `?`
    Ternary,
    /// `)`, `]` or `}`
    Close,
    /// String literal or template literal segment
    String,
    /// Regular expression literal with flags
    Regexp,
    /// Numeric literal (not validated)
    Number,
    /// `.`
    Dot,
    /// `...`
    Spread,
    /// `=>`
    Arrow,
    /// Line or block comment
    Comment,
    /// Synthetic `${` opening a template substitution
    TemplateBrace,
}

impl TokenKind {
    /// Short lowercase name used in traces.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Lit => "lit",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Op => "op",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::Brace => "brace",
            TokenKind::Array => "array",
            TokenKind::Paren => "paren",
            TokenKind::Ternary => "ternary",
            TokenKind::Close => "close",
            TokenKind::String => "string",
            TokenKind::Regexp => "regexp",
            TokenKind::Number => "number",
            TokenKind::Dot => "dot",
            TokenKind::Spread => "spread",
            TokenKind::Arrow => "arrow",
            TokenKind::Comment => "comment",
            TokenKind::TemplateBrace => "t_brace",
        }
    }

    /// Does this kind open a nesting level?
    #[inline]
    pub const fn is_opener(self) -> bool {
        matches!(
            self,
            TokenKind::Brace | TokenKind::Array | TokenKind::Paren | TokenKind::TemplateBrace
        )
    }

    /// Does this kind close a nesting level?
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(self, TokenKind::Close)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// What the bytes are
    pub kind: TokenKind,
    /// Where the bytes are
    pub span: Span,
    /// Line the token starts on (1-based)
    pub line: u32,
    /// For [`TokenKind::Lit`]: the next significant byte is `:`
    pub label_hint: bool,
}

impl Token {
    /// Borrow the token's bytes from the buffer it was scanned from.
    ///
    /// # Example
    ///
    /// ```
    /// use jscan_lex::{Lexer, TokenKind};
    ///
    /// let src = b"  foo";
    /// let mut lexer = Lexer::new(src);
    /// let tok = lexer.next_token(&false).unwrap();
    /// assert_eq!(tok.kind, TokenKind::Lit);
    /// assert_eq!(tok.text(src), b"foo");
    /// ```
    #[inline]
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        self.span.slice(source)
    }

    /// Byte offset of the first byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.offset
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len
    }

    /// Returns true for zero-length tokens (only [`TokenKind::Eof`]).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns true for [`TokenKind::Eof`].
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
