//! Operator lexing.
//!
//! Operators are runs of one repeated byte with an optional `=` suffix,
//! which covers every JavaScript operator without a table:
//!
//! - `= & | ^ ~ ! % / + -` repeat at most once
//! - `*` and `<` repeat twice (`**`, `<<`)
//! - `>` repeats three times (`>>>`)
//!
//! `=>` is an arrow. Doubled `+ - & |` stop after the pair, except that
//! `&&=` and `||=` take their `=`. Otherwise one trailing `=` is folded
//! in, and a second only after `=` or `!` (`===`, `!==`).

use crate::token::TokenKind;

/// How many extra copies of `b` an operator run may contain.
fn repeat_limit(b: u8) -> Option<usize> {
    match b {
        b'=' | b'&' | b'|' | b'^' | b'~' | b'!' | b'%' | b'/' | b'+' | b'-' => Some(1),
        b'*' | b'<' => Some(2),
        b'>' => Some(3),
        _ => None,
    }
}

/// Scans an operator at the start of `rest`.
///
/// Returns `None` when the first byte is not an operator byte. Whether a
/// `/` is division must be settled by the caller first.
pub(crate) fn scan_operator(rest: &[u8]) -> Option<(TokenKind, usize)> {
    let start = *rest.first()?;
    let allowed = repeat_limit(start)?;
    let at = |i: usize| rest.get(i).copied();

    let mut len = 0;
    let mut next;
    loop {
        len += 1;
        next = at(len);
        if next != Some(start) || len >= allowed {
            break;
        }
    }

    if start == b'=' && next == Some(b'>') {
        return Some((TokenKind::Arrow, 2));
    }

    if next == Some(start) && matches!(start, b'+' | b'-' | b'|' | b'&') {
        len += 1;
        if matches!(start, b'|' | b'&') && at(len) == Some(b'=') {
            len += 1;
        }
    } else if next == Some(b'=') {
        len += 1;
        if at(len) == Some(b'=') && matches!(start, b'=' | b'!') {
            len += 1;
        }
    }

    Some((TokenKind::Op, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(src: &str) -> Option<(TokenKind, usize)> {
        scan_operator(src.as_bytes())
    }

    fn op_len(src: &str) -> usize {
        match op(src) {
            Some((TokenKind::Op, len)) => len,
            other => panic!("{src:?} scanned as {other:?}"),
        }
    }

    #[test]
    fn test_single_byte_operators() {
        for src in ["= ", "& ", "| ", "^ ", "~ ", "! ", "% ", "/ ", "+ ", "- ", "* ", "< ", "> "] {
            assert_eq!(op_len(src), 1, "{src:?}");
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(op_len("=="), 2);
        assert_eq!(op_len("==="), 3);
        assert_eq!(op_len("===="), 3);
        assert_eq!(op_len("!="), 2);
        assert_eq!(op_len("!=="), 3);
        assert_eq!(op_len("!!x"), 1);
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(op_len("+="), 2);
        assert_eq!(op_len("-="), 2);
        assert_eq!(op_len("%="), 2);
        assert_eq!(op_len("/="), 2);
        assert_eq!(op_len("<="), 2);
        assert_eq!(op_len(">="), 2);
        assert_eq!(op_len("<=="), 2);
    }

    #[test]
    fn test_repeated_operators() {
        assert_eq!(op_len("**"), 2);
        assert_eq!(op_len("**="), 3);
        assert_eq!(op_len("***"), 2);
        assert_eq!(op_len("<<"), 2);
        assert_eq!(op_len("<<="), 3);
        assert_eq!(op_len(">>"), 2);
        assert_eq!(op_len(">>>"), 3);
        assert_eq!(op_len(">>>="), 4);
        assert_eq!(op_len(">>>>"), 3);
    }

    #[test]
    fn test_doubled_operators_stop_after_pair() {
        assert_eq!(op_len("++"), 2);
        assert_eq!(op_len("+++"), 2);
        assert_eq!(op_len("--x"), 2);
        assert_eq!(op_len("++="), 2);
        assert_eq!(op_len("&&"), 2);
        assert_eq!(op_len("||"), 2);
    }

    #[test]
    fn test_logical_assignment() {
        assert_eq!(op_len("&&="), 3);
        assert_eq!(op_len("||="), 3);
        assert_eq!(op_len("&="), 2);
        assert_eq!(op_len("|="), 2);
    }

    #[test]
    fn test_arrow() {
        assert_eq!(op("=>"), Some((TokenKind::Arrow, 2)));
        assert_eq!(op("=> x"), Some((TokenKind::Arrow, 2)));
        assert_eq!(op_len("==>"), 2);
    }

    #[test]
    fn test_not_an_operator() {
        assert_eq!(op("a"), None);
        assert_eq!(op("?"), None);
        assert_eq!(op(""), None);
    }
}
