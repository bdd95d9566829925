//! Regular expression literal lexing.

use crate::chars::is_alnum;

/// Scans a regex literal whose opening `/` is `rest[0]`.
///
/// The body ends at the first `/` that is neither escaped nor inside a
/// `[...]` class. A run of alphanumeric flags follows. Without a closing
/// slash the literal runs to the end of input.
pub(crate) fn scan_regex(rest: &[u8]) -> usize {
    let mut in_class = false;
    let mut i = 1;

    while let Some(&c) = rest.get(i) {
        match c {
            b'[' => in_class = true,
            b']' => in_class = false,
            b'\\' => i += 1,
            b'/' if !in_class => {
                i += 1;
                i += rest
                    .get(i..)
                    .unwrap_or_default()
                    .iter()
                    .take_while(|&&b| is_alnum(b))
                    .count();
                break;
            },
            _ => {},
        }
        i += 1;
    }

    i.min(rest.len())
}
