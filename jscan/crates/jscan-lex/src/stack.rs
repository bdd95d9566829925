//! Bounded nesting stack.
//!
//! One bit per open bracket-like construct: set when the level was opened by
//! a template substitution `${`, clear for `(`, `[` and `{`. The stack has a
//! fixed capacity chosen at construction; pushing past it is an error rather
//! than silent truncation.

use bit_vec::BitVec;
use thiserror::Error;

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Failure of a nesting stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NestingError {
    /// The stack already holds `limit` levels.
    #[error("nesting deeper than {limit} levels")]
    Overflow {
        /// Capacity of the stack
        limit: usize,
    },

    /// Pop with no open level.
    #[error("closing bracket with nothing open")]
    Underflow,
}

/// LIFO stack of 1-bit tags with a fixed capacity.
///
/// # Example
///
/// ```
/// use jscan_lex::stack::{NestingError, NestingStack};
///
/// let mut stack = NestingStack::with_limit(2);
/// stack.push(false).unwrap();
/// stack.push(true).unwrap();
/// assert_eq!(stack.push(false), Err(NestingError::Overflow { limit: 2 }));
///
/// assert_eq!(stack.pop(), Ok(true));
/// assert_eq!(stack.pop(), Ok(false));
/// assert_eq!(stack.pop(), Err(NestingError::Underflow));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NestingStack {
    bits: BitVec,
    depth: usize,
}

impl NestingStack {
    /// Creates an empty stack with the default capacity.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_DEPTH)
    }

    /// Creates an empty stack holding at most `limit` levels.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            bits: BitVec::from_elem(limit, false),
            depth: 0,
        }
    }

    /// Opens a level. `is_template_brace` tags it as a `${` substitution.
    pub fn push(&mut self, is_template_brace: bool) -> Result<(), NestingError> {
        if self.depth == self.limit() {
            return Err(NestingError::Overflow {
                limit: self.limit(),
            });
        }
        self.bits.set(self.depth, is_template_brace);
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost level and returns its tag.
    pub fn pop(&mut self) -> Result<bool, NestingError> {
        if self.depth == 0 {
            return Err(NestingError::Underflow);
        }
        self.depth -= 1;
        Ok(self.bits.get(self.depth).unwrap_or(false))
    }

    /// Number of open levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum number of open levels.
    #[inline]
    pub fn limit(&self) -> usize {
        self.bits.len()
    }

    /// Returns true when nothing is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
}

impl Default for NestingStack {
    fn default() -> Self {
        Self::new()
    }
}
