//! Label lookahead.
//!
//! `foo: bar` is a labeled statement and `foo + bar` is not. Rather than
//! make the parser backtrack, every identifier-like token carries a hint
//! saying whether a `:` follows it.

use super::comment::scan_comment;
use super::state::{LexerState, Pending};

impl LexerState<'_> {
    /// Is the next significant byte a `:`?
    ///
    /// Whitespace and comments are skipped on a copy of the cursor; the
    /// committed position does not move. A comment that runs to the end of
    /// input means there is no colon. While a template literal is about to
    /// resume, the next byte belongs to the literal and the answer is no.
    pub fn peeks_colon(&self) -> bool {
        if self.pending == Pending::ResumeLiteral {
            return false;
        }

        let mut probe = self.cursor;
        loop {
            probe.skip_whitespace();
            let rest = probe.rest();
            match scan_comment(rest) {
                Some(comment) if comment.terminated => {
                    probe.advance_bytes(comment.len);
                },
                Some(_) => return false,
                None => return rest.first() == Some(&b':'),
            }
        }
    }
}
