//! Identifier-like literal lexing.
//!
//! Identifiers and reserved words are the same token here. Escapes are
//! consumed without being decoded: `\` takes the next byte, and when the
//! byte after that is `{` everything through the matching `}` as well, which
//! covers both `\u0041` and `\u{41}`.

use crate::chars::{is_ident_continue, is_ident_start};

/// Scans an identifier-like literal at the start of `rest`.
pub(crate) fn scan_identifier(rest: &[u8]) -> Option<usize> {
    let mut i = 0;

    while let Some(&c) = rest.get(i) {
        if c == b'\\' {
            i += 2;
            if rest.get(i) == Some(&b'{') {
                i += rest[i..]
                    .iter()
                    .position(|&b| b == b'}')
                    .map_or(rest.len() - i, |close| close + 1);
            }
            continue;
        }

        let valid = if i == 0 {
            is_ident_start(c)
        } else {
            is_ident_continue(c)
        };
        if !valid {
            break;
        }
        i += 1;
    }

    let len = i.min(rest.len());
    (len > 0).then_some(len)
}
