//! Value-context boundary.
//!
//! Whether `/` starts a regular expression or is the division operator
//! depends on the previous token: after something that can end an
//! expression (`a`, `1`, `)`) it divides, otherwise it opens a regex. Only
//! the parser really knows, so the lexer asks through [`ValueContext`],
//! exactly once per `/` that reaches operator classification.
//!
//! [`PrecedingToken`] is a token-history heuristic good enough for drivers
//! without a parser, such as the trace printer and the tests.

use crate::token::{Token, TokenKind};

/// Error returned by a failed value-context query.
pub type ContextError = Box<dyn std::error::Error + Send + Sync>;

/// Answers "could the previous token end an expression?".
///
/// Implementations must not touch lexer state; the query takes `&self`.
///
/// # Example
///
/// ```
/// use jscan_lex::{Lexer, TokenKind};
///
/// let src = b"/abc/g";
///
/// // `true`: the slash divides
/// let mut lexer = Lexer::new(src);
/// assert_eq!(lexer.next_token(&true).unwrap().kind, TokenKind::Op);
///
/// // `false`: the slash opens a regex
/// let mut lexer = Lexer::new(src);
/// let tok = lexer.next_token(&false).unwrap();
/// assert_eq!(tok.kind, TokenKind::Regexp);
/// assert_eq!(tok.len(), 6);
/// ```
pub trait ValueContext {
    /// Returns true when the previous token could end an expression.
    fn is_value_context(&self) -> Result<bool, ContextError>;
}

impl ValueContext for bool {
    fn is_value_context(&self) -> Result<bool, ContextError> {
        Ok(*self)
    }
}

impl<F> ValueContext for F
where
    F: Fn() -> Result<bool, ContextError>,
{
    fn is_value_context(&self) -> Result<bool, ContextError> {
        self()
    }
}

/// Keywords after which an expression starts, so `/` opens a regex.
const OPERATOR_KEYWORDS: &[&[u8]] = &[
    b"return",
    b"typeof",
    b"instanceof",
    b"in",
    b"of",
    b"new",
    b"delete",
    b"void",
    b"throw",
    b"case",
    b"do",
    b"else",
    b"yield",
    b"await",
];

/// Value context derived from the significant tokens seen so far.
///
/// Comments are ignored. Before any token has been seen the answer is
/// `false`, so a leading `/` is a regex. `++` and `--` keep the answer of
/// the token before them, so the slash in `a++ / 2` divides.
///
/// # Example
///
/// ```
/// use jscan_lex::{Lexer, PrecedingToken, TokenKind};
///
/// let src = b"a / b";
/// let mut lexer = Lexer::new(src);
/// let mut ctx = PrecedingToken::new();
///
/// let a = lexer.next_token(&ctx).unwrap();
/// ctx.observe(&a, lexer.text(&a));
/// assert_eq!(lexer.next_token(&ctx).unwrap().kind, TokenKind::Op);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrecedingToken {
    value: bool,
}

impl PrecedingToken {
    /// Creates a context with no token history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a token returned by the lexer.
    pub fn observe(&mut self, token: &Token, text: &[u8]) {
        match token.kind {
            TokenKind::Comment => {}
            TokenKind::Op if matches!(text, b"++" | b"--") => {}
            kind => self.value = Self::ends_expression(kind, text),
        }
    }

    fn ends_expression(kind: TokenKind, text: &[u8]) -> bool {
        match kind {
            TokenKind::Lit => !OPERATOR_KEYWORDS.contains(&text),
            TokenKind::Number | TokenKind::String | TokenKind::Regexp => true,
            TokenKind::Close => matches!(text, b")" | b"]"),
            _ => false,
        }
    }
}

impl ValueContext for PrecedingToken {
    fn is_value_context(&self) -> Result<bool, ContextError> {
        Ok(self.value)
    }
}
