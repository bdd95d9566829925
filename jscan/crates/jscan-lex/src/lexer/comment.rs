//! Comment scanning.
//!
//! Comments are tokens here, not trivia: a parser that wants to drop them
//! can, but spans stay contiguous either way.

/// Result of scanning a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommentScan {
    /// Bytes in the comment token
    pub len: usize,
    /// False when the comment ran into the end of input
    pub terminated: bool,
}

/// Scans a comment at the start of `rest`.
///
/// A line comment stops before its newline. A block comment includes its
/// closing `*/`; the search for it starts after the opening `/*`, so `/*/`
/// does not close itself. Either form without a terminator runs to the end
/// of input.
pub(crate) fn scan_comment(rest: &[u8]) -> Option<CommentScan> {
    let body = rest.get(2..)?;
    match rest[1] {
        b'/' if rest[0] == b'/' => Some(match body.iter().position(|&b| b == b'\n') {
            Some(nl) => CommentScan {
                len: 2 + nl,
                terminated: true,
            },
            None => CommentScan {
                len: rest.len(),
                terminated: false,
            },
        }),
        b'*' if rest[0] == b'/' => Some(match body.windows(2).position(|w| w == b"*/") {
            Some(end) => CommentScan {
                len: 2 + end + 2,
                terminated: true,
            },
            None => CommentScan {
                len: rest.len(),
                terminated: false,
            },
        }),
        _ => None,
    }
}
