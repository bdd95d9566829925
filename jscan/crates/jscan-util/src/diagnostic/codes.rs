//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use jscan_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0002;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 2);
//! assert_eq!(code.as_str(), "E0002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // LEXICAL ERRORS (E0001-E0099)
    // =========================================================================

    /// E0001: Bracket nesting deeper than the configured limit
    pub const E0001: Self = Self::new("E", 1);
    /// E0002: Closing bracket with nothing open
    pub const E0002: Self = Self::new("E", 2);
    /// E0003: End of input inside an open bracket
    pub const E0003: Self = Self::new("E", 3);
    /// E0004: No token starts at this position
    pub const E0004: Self = Self::new("E", 4);
    /// E0005: The value-context query failed
    pub const E0005: Self = Self::new("E", 5);
    /// E0006: Token relabeled after the lexer moved past it
    pub const E0006: Self = Self::new("E", 6);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
