//! Lexer state and the scan driver.

use jscan_util::Span;
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::context::ValueContext;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::stack::{NestingError, NestingStack};
use crate::token::{Token, TokenKind};

/// Work carried from one token to the next.
///
/// Both continuations come from template literals, and at most one can be
/// pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    /// Classify normally.
    #[default]
    None,
    /// A literal segment stopped at `${`: emit the 2-byte
    /// [`TokenKind::TemplateBrace`] next.
    TemplateBrace,
    /// A `}` closed a substitution: continue the template literal body.
    ResumeLiteral,
}

/// Everything the lexer knows about its position in the input.
///
/// Cloning the state is cheap enough to snapshot it per token, which is how
/// [`Lexer::peek`](crate::Lexer::peek) caches scanned tokens.
#[derive(Debug, Clone)]
pub struct LexerState<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) pending: Pending,
    pub(super) stack: NestingStack,
}

impl<'a> LexerState<'a> {
    /// Fresh state at offset 0, line 1, nothing open or pending.
    pub fn new(source: &'a [u8], config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            pending: Pending::None,
            stack: NestingStack::with_limit(config.max_depth),
        }
    }

    /// Scans one token.
    ///
    /// Skips whitespace, classifies the token at the cursor, and commits
    /// it. Whitespace is not skipped while [`Pending::ResumeLiteral`] is
    /// set: those bytes belong to the template literal.
    ///
    /// On error nothing but the whitespace skip is committed, so scanning
    /// again reports the same error at the same offset.
    pub fn scan<C>(&mut self, ctx: &C) -> LexResult<Token>
    where
        C: ValueContext + ?Sized,
    {
        if self.pending != Pending::ResumeLiteral {
            self.cursor.skip_whitespace();
        }

        let offset = self.cursor.position();
        let line = self.cursor.line();

        let (kind, len) = match self.classify(ctx) {
            Ok(classified) => classified,
            Err(err) => {
                debug!(offset, line, code = %err.code(), "lexical error: {}", err);
                return Err(err);
            },
        };

        let len = self.cursor.advance_bytes(len);
        let label_hint = kind == TokenKind::Lit && self.peeks_colon();

        trace!(kind = kind.name(), offset, len, line, label_hint, "token");

        Ok(Token {
            kind,
            span: Span::new(offset, len),
            line,
            label_hint,
        })
    }

    /// Byte offset of the next unscanned byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Number of open brackets and substitutions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The continuation the next scan will pick up.
    #[inline]
    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// The buffer being scanned.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.cursor.source()
    }

    /// Opens a nesting level at the cursor.
    pub(super) fn open(&mut self, is_template_brace: bool) -> LexResult<()> {
        self.stack
            .push(is_template_brace)
            .map_err(|err| self.nesting_error(err))
    }

    /// Closes a nesting level at the cursor, returning its tag.
    pub(super) fn close(&mut self) -> LexResult<bool> {
        self.stack.pop().map_err(|err| self.nesting_error(err))
    }

    fn nesting_error(&self, err: NestingError) -> LexError {
        let offset = self.cursor.position();
        let line = self.cursor.line();
        match err {
            NestingError::Overflow { limit } => LexError::NestingOverflow {
                offset,
                line,
                limit,
            },
            NestingError::Underflow => LexError::NestingUnderflow { offset, line },
        }
    }
}
