//! Byte classification helpers.
//!
//! All predicates follow the C locale: only ASCII letters and digits are
//! alphanumeric, and bytes with the high bit set are never whitespace.
//! Identifiers treat high-bit bytes as opaque letters, which lets UTF-8
//! encoded names through without decoding them.

/// Whitespace as defined by C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// ASCII decimal digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII letter or digit.
#[inline]
pub const fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Byte with the high bit set (part of a multi-byte UTF-8 sequence).
#[inline]
pub const fn is_high_bit(b: u8) -> bool {
    b >= 0x80
}

/// Can this byte start an identifier-like literal?
///
/// Backslash escapes are handled separately by the identifier scanner.
///
/// # Examples
///
/// ```
/// use jscan_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'$'));
/// assert!(is_ident_start(0xc3));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub const fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'$' || b == b'_' || is_high_bit(b)
}

/// Can this byte continue an identifier-like literal?
#[inline]
pub const fn is_ident_continue(b: u8) -> bool {
    is_alnum(b) || b == b'$' || b == b'_' || is_high_bit(b)
}
