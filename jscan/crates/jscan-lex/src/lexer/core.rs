//! Core lexer implementation.
//!
//! [`Lexer`] wraps a [`LexerState`] with the surface a parser needs: pull
//! one token at a time, look one significant token ahead without paying for
//! classification twice, and relabel the token it just received.

use std::collections::VecDeque;

use crate::config::LexerConfig;
use crate::context::{PrecedingToken, ValueContext};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

use super::state::LexerState;

/// Lexer for JavaScript-family source text.
///
/// The lexer borrows its input and hands out [`Token`]s that point into it.
/// Every call that may meet a `/` takes a [`ValueContext`] deciding whether
/// it divides or opens a regex.
///
/// # Example
///
/// ```
/// use jscan_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_str("x = `a${b}c`;");
/// let kinds: Vec<TokenKind> = lexer
///     .tokens()
///     .map(|tok| tok.unwrap().kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Lit,
///         TokenKind::Op,
///         TokenKind::String,
///         TokenKind::TemplateBrace,
///         TokenKind::Lit,
///         TokenKind::Close,
///         TokenKind::String,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Committed state: everything up to the last returned token.
    state: LexerState<'a>,

    /// Tokens scanned by `peek` but not yet returned, each with the state
    /// right after it.
    peeked: VecDeque<(Token, LexerState<'a>)>,

    /// The most recently returned token.
    last: Option<Token>,

    /// Value context after the last returned token.
    history: PrecedingToken,

    /// Value context before the last returned token, for `update`.
    history_before_last: PrecedingToken,

    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the default configuration.
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer over a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a [u8], config: LexerConfig) -> Self {
        Self {
            state: LexerState::new(source, config),
            peeked: VecDeque::new(),
            last: None,
            history: PrecedingToken::new(),
            history_before_last: PrecedingToken::new(),
            config,
        }
    }

    /// Returns the next token, comments included.
    ///
    /// Tokens already scanned by [`peek`](Self::peek) are returned from the
    /// cache without being classified again; `ctx` is only consulted for
    /// fresh scans. After the end of input every call returns
    /// [`TokenKind::Eof`] again.
    ///
    /// # Errors
    ///
    /// Any [`LexError`] from classification. Nothing is consumed, so the
    /// same error is returned if the call is repeated.
    pub fn next_token<C>(&mut self, ctx: &C) -> LexResult<Token>
    where
        C: ValueContext + ?Sized,
    {
        let token = match self.peeked.pop_front() {
            Some((token, after)) => {
                self.state = after;
                token
            },
            None => self.state.scan(ctx)?,
        };
        self.last = Some(token);
        let text = self.text(&token);
        self.history_before_last = self.history;
        self.history.observe(&token, text);
        Ok(token)
    }

    /// Returns the next non-comment token without consuming anything.
    ///
    /// Comments scanned on the way are cached along with the token, and
    /// [`next_token`](Self::next_token) replays them in order. The cached
    /// tokens were classified with the `ctx` given here.
    ///
    /// # Example
    ///
    /// ```
    /// use jscan_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::from_str("/* doc */ foo");
    /// let ahead = lexer.peek(&false).unwrap();
    /// assert_eq!(ahead.kind, TokenKind::Lit);
    /// assert_eq!(lexer.position(), 0);
    ///
    /// assert_eq!(lexer.next_token(&false).unwrap().kind, TokenKind::Comment);
    /// assert_eq!(lexer.next_token(&false).unwrap(), ahead);
    /// ```
    pub fn peek<C>(&mut self, ctx: &C) -> LexResult<Token>
    where
        C: ValueContext + ?Sized,
    {
        if let Some((token, _)) = self
            .peeked
            .iter()
            .find(|(token, _)| token.kind != TokenKind::Comment)
        {
            return Ok(*token);
        }

        let mut scratch = match self.peeked.back() {
            Some((_, after)) => after.clone(),
            None => self.state.clone(),
        };
        loop {
            let token = scratch.scan(ctx)?;
            self.peeked.push_back((token, scratch.clone()));
            if token.kind != TokenKind::Comment {
                return Ok(token);
            }
        }
    }

    /// Relabels the most recently returned token.
    ///
    /// No bytes are scanned again: the span, line and label hint stay as
    /// they were. Only the token just returned can be relabeled, and only
    /// while nothing after it has been scanned by [`peek`](Self::peek).
    ///
    /// # Errors
    ///
    /// [`LexError::StaleUpdate`] if no token has been returned yet or the
    /// lexer has already looked past the last one.
    ///
    /// # Example
    ///
    /// ```
    /// use jscan_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::from_str("of");
    /// lexer.next_token(&false).unwrap();
    /// let tok = lexer.update(TokenKind::Op).unwrap();
    /// assert_eq!(tok.kind, TokenKind::Op);
    /// assert_eq!(lexer.last_token(), Some(tok));
    /// ```
    pub fn update(&mut self, kind: TokenKind) -> LexResult<Token> {
        let stale = LexError::StaleUpdate {
            offset: self.state.position(),
            line: self.state.line(),
        };
        if !self.peeked.is_empty() {
            return Err(stale);
        }
        let last = self.last.as_mut().ok_or(stale)?;
        last.kind = kind;
        let last = *last;
        let text = self.text(&last);
        self.history = self.history_before_last;
        self.history.observe(&last, text);
        Ok(last)
    }

    /// Iterates over the remaining tokens up to and including
    /// [`TokenKind::Eof`], or up to the first error.
    ///
    /// The iterator decides `/` with a [`PrecedingToken`] context that
    /// covers every token returned so far, including those returned
    /// before the iterator was created.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// The most recently returned token.
    #[inline]
    pub fn last_token(&self) -> Option<Token> {
        self.last
    }

    /// Byte offset just past the last returned token.
    #[inline]
    pub fn position(&self) -> usize {
        self.state.position()
    }

    /// Line the lexer is on after the last returned token.
    #[inline]
    pub fn line(&self) -> u32 {
        self.state.line()
    }

    /// Number of open brackets and substitutions after the last returned
    /// token.
    #[inline]
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// The buffer being scanned.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.state.source()
    }

    /// Borrows a token's bytes from the source buffer.
    #[inline]
    pub fn text(&self, token: &Token) -> &'a [u8] {
        token.text(self.source())
    }

    /// The committed lexer state.
    #[inline]
    pub fn state(&self) -> &LexerState<'a> {
        &self.state
    }

    /// The configuration this lexer was built with.
    #[inline]
    pub fn config(&self) -> LexerConfig {
        self.config
    }
}

/// Iterator returned by [`Lexer::tokens`].
pub struct Tokens<'l, 'a> {
    lexer: &'l mut Lexer<'a>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let context = self.lexer.history;
        let result = self.lexer.next_token(&context);
        match &result {
            Ok(token) if !token.is_eof() => {},
            _ => self.done = true,
        }
        Some(result)
    }
}
