//! Lexer configuration.

use crate::stack::DEFAULT_MAX_DEPTH;

/// Knobs for a [`Lexer`](crate::Lexer).
///
/// # Example
///
/// ```
/// use jscan_lex::LexerConfig;
///
/// let config = LexerConfig::default().with_max_depth(8);
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Maximum number of simultaneously open brackets and substitutions
    pub max_depth: usize,
}

impl LexerConfig {
    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
