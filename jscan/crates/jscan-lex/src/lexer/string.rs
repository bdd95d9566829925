//! String and template literal lexing.
//!
//! A template literal with substitutions is split into several tokens:
//!
//! ```text
//! `a${b}c`   =>   string "`a"   t_brace "${"   lit "b"   close "}"   string "c`"
//! ```
//!
//! The segment before `${` arms [`Pending::TemplateBrace`], and the `}`
//! that closes the substitution arms [`Pending::ResumeLiteral`] (see the
//! brace handling in classification).

use super::state::{LexerState, Pending};

/// How a string body scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StringScan {
    /// Bytes consumed, including the closing delimiter if found
    pub len: usize,
    /// Stopped at an unescaped `${` inside a template literal
    pub substitution: bool,
}

/// Scans a string body starting at `rest[from]`.
///
/// `\` always takes the following byte with it. Raw newlines are accepted
/// in every string form.
pub(crate) fn scan_string_body(rest: &[u8], delim: u8, from: usize) -> StringScan {
    let mut i = from;
    while let Some(&c) = rest.get(i) {
        if c == delim {
            return StringScan {
                len: i + 1,
                substitution: false,
            };
        }
        if c == b'\\' {
            i += 2;
            continue;
        }
        if delim == b'`' && c == b'$' && rest.get(i + 1) == Some(&b'{') {
            return StringScan {
                len: i,
                substitution: true,
            };
        }
        i += 1;
    }
    StringScan {
        len: rest.len(),
        substitution: false,
    }
}

impl LexerState<'_> {
    /// Lexes a string opened by `delim` at the cursor.
    pub(super) fn lex_string(&mut self, delim: u8) -> usize {
        self.finish_string(delim, 1)
    }

    /// Lexes the rest of a template literal after a substitution closed.
    pub(super) fn lex_template_tail(&mut self) -> usize {
        self.finish_string(b'`', 0)
    }

    fn finish_string(&mut self, delim: u8, from: usize) -> usize {
        let scan = scan_string_body(self.cursor.rest(), delim, from);
        if scan.substitution {
            self.pending = Pending::TemplateBrace;
        }
        scan.len
    }
}
