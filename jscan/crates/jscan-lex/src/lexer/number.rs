//! Number literal and dot lexing.
//!
//! Numbers are not validated: after a digit (or `.` and a digit) every
//! ASCII alphanumeric byte and dot belongs to the literal, so `0x1F` and
//! even `1.2.3` come out whole. Rejecting malformed literals is left to a
//! later stage.

use crate::chars::{is_alnum, is_digit};
use crate::token::TokenKind;

/// Scans a numeric literal at the start of `rest`.
pub(crate) fn scan_number(rest: &[u8]) -> Option<usize> {
    let first = *rest.first()?;
    let starts_number =
        is_digit(first) || (first == b'.' && rest.get(1).is_some_and(|&b| is_digit(b)));
    if !starts_number {
        return None;
    }

    let tail = rest[1..]
        .iter()
        .take_while(|&&b| is_alnum(b) || b == b'.')
        .count();
    Some(1 + tail)
}

/// Scans `.` or `...` at the start of `rest`.
pub(crate) fn scan_dot(rest: &[u8]) -> Option<(TokenKind, usize)> {
    match rest {
        [b'.', b'.', b'.', ..] => Some((TokenKind::Spread, 3)),
        [b'.', ..] => Some((TokenKind::Dot, 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(src: &str) -> Option<usize> {
        scan_number(src.as_bytes())
    }

    #[test]
    fn test_integers_and_decimals() {
        assert_eq!(number("0"), Some(1));
        assert_eq!(number("42;"), Some(2));
        assert_eq!(number("3.14 "), Some(4));
        assert_eq!(number(".5)"), Some(2));
    }

    #[test]
    fn test_permissive_forms() {
        assert_eq!(number("0x1F"), Some(4));
        assert_eq!(number("1_000"), Some(1));
        assert_eq!(number("1.2.3"), Some(5));
        assert_eq!(number("10n"), Some(3));
        // the exponent sign ends the literal
        assert_eq!(number("1e-3"), Some(2));
        assert_eq!(number("1.toString"), Some(10));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(number("."), None);
        assert_eq!(number(".a"), None);
        assert_eq!(number("..."), None);
        assert_eq!(number("x1"), None);
    }

    #[test]
    fn test_dot_family() {
        assert_eq!(scan_dot(b"..."), Some((TokenKind::Spread, 3)));
        assert_eq!(scan_dot(b"...x"), Some((TokenKind::Spread, 3)));
        assert_eq!(scan_dot(b".."), Some((TokenKind::Dot, 1)));
        assert_eq!(scan_dot(b".x"), Some((TokenKind::Dot, 1)));
        assert_eq!(scan_dot(b"x"), None);
    }
}
