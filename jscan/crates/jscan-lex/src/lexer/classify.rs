//! Token classification.
//!
//! Decides the kind and length of the token at the cursor. The rules are
//! tried in a fixed order and the first match wins:
//!
//! 1. end of input
//! 2. pending template continuation
//! 3. comments
//! 4. single-byte punctuation and brackets
//! 5. operators (`/` only in value context)
//! 6. strings and template literal segments
//! 7. numbers
//! 8. `.` and `...`
//! 9. regular expressions
//! 10. identifier-like literals
//!
//! Anything else is a classification error. Classification never moves the
//! cursor; the scan driver commits the returned length.

use crate::context::ValueContext;
use crate::error::{LexError, LexResult};
use crate::token::TokenKind;

use super::comment::scan_comment;
use super::identifier::scan_identifier;
use super::number::{scan_dot, scan_number};
use super::operator::scan_operator;
use super::regex::scan_regex;
use super::state::{LexerState, Pending};

impl LexerState<'_> {
    /// Classifies the token at the cursor.
    ///
    /// The pending continuation is consumed here. If classification fails
    /// the continuation is put back, and the nesting stack is untouched
    /// because every failing path fails before mutating it.
    pub(super) fn classify<C>(&mut self, ctx: &C) -> LexResult<(TokenKind, usize)>
    where
        C: ValueContext + ?Sized,
    {
        let pending = std::mem::take(&mut self.pending);
        let result = self.dispatch(pending, ctx);
        if result.is_err() {
            self.pending = pending;
        }
        result
    }

    fn dispatch<C>(&mut self, pending: Pending, ctx: &C) -> LexResult<(TokenKind, usize)>
    where
        C: ValueContext + ?Sized,
    {
        let Some(c) = self.cursor.first() else {
            if !self.stack.is_empty() {
                return Err(LexError::UnbalancedAtEof {
                    offset: self.cursor.position(),
                    line: self.cursor.line(),
                    depth: self.stack.depth(),
                });
            }
            return Ok((TokenKind::Eof, 0));
        };

        match pending {
            Pending::TemplateBrace => {
                self.open(true)?;
                return Ok((TokenKind::TemplateBrace, 2));
            },
            Pending::ResumeLiteral => return Ok((TokenKind::String, self.lex_template_tail())),
            Pending::None => {},
        }

        let rest = self.cursor.rest();

        if let Some(comment) = scan_comment(rest) {
            return Ok((TokenKind::Comment, comment.len));
        }

        match c {
            b';' => return Ok((TokenKind::Semicolon, 1)),
            b'?' => return Ok((TokenKind::Ternary, 1)),
            b':' => return Ok((TokenKind::Colon, 1)),
            b',' => return Ok((TokenKind::Comma, 1)),
            b'(' => {
                self.open(false)?;
                return Ok((TokenKind::Paren, 1));
            },
            b'[' => {
                self.open(false)?;
                return Ok((TokenKind::Array, 1));
            },
            b'{' => {
                self.open(false)?;
                return Ok((TokenKind::Brace, 1));
            },
            b')' | b']' => {
                self.close()?;
                return Ok((TokenKind::Close, 1));
            },
            b'}' => {
                if self.close()? {
                    self.pending = Pending::ResumeLiteral;
                }
                return Ok((TokenKind::Close, 1));
            },
            _ => {},
        }

        if c != b'/' || self.slash_divides(ctx)? {
            if let Some(op) = scan_operator(rest) {
                return Ok(op);
            }
        }

        if matches!(c, b'\'' | b'"' | b'`') {
            return Ok((TokenKind::String, self.lex_string(c)));
        }

        if let Some(len) = scan_number(rest) {
            return Ok((TokenKind::Number, len));
        }

        if let Some(dot) = scan_dot(rest) {
            return Ok(dot);
        }

        if c == b'/' {
            return Ok((TokenKind::Regexp, scan_regex(rest)));
        }

        if let Some(len) = scan_identifier(rest) {
            return Ok((TokenKind::Lit, len));
        }

        Err(LexError::Classification {
            offset: self.cursor.position(),
            line: self.cursor.line(),
        })
    }

    /// Asks the value context whether the `/` at the cursor is division.
    fn slash_divides<C>(&self, ctx: &C) -> LexResult<bool>
    where
        C: ValueContext + ?Sized,
    {
        ctx.is_value_context()
            .map_err(|source| LexError::ContextQuery {
                offset: self.cursor.position(),
                line: self.cursor.line(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::context::ContextError;
    use crate::{LexError, Lexer, LexerConfig, TokenKind};

    fn kinds(src: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::from_str(src);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token(&true).unwrap();
            if tok.is_eof() {
                break;
            }
            let text = String::from_utf8_lossy(lexer.text(&tok)).into_owned();
            out.push((tok.kind, text));
        }
        out
    }

    #[test]
    fn test_punctuation() {
        let toks = kinds("; ? : ,");
        let expected = [
            TokenKind::Semicolon,
            TokenKind::Ternary,
            TokenKind::Colon,
            TokenKind::Comma,
        ];
        assert_eq!(toks.iter().map(|t| t.0).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_brackets_nest() {
        let mut lexer = Lexer::from_str("({[ ]})");
        let mut depths = Vec::new();
        for _ in 0..6 {
            lexer.next_token(&true).unwrap();
            depths.push(lexer.depth());
        }
        assert_eq!(depths, vec![1, 2, 3, 2, 1, 0]);
        assert!(lexer.next_token(&true).unwrap().is_eof());
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::from_str("a");
        lexer.next_token(&true).unwrap();
        let first = lexer.next_token(&true).unwrap();
        let second = lexer.next_token(&true).unwrap();
        assert!(first.is_eof());
        assert_eq!(first, second);
        assert_eq!(first.len(), 0);
    }

    #[test]
    fn test_unbalanced_at_eof() {
        let mut lexer = Lexer::from_str("f(a");
        lexer.next_token(&true).unwrap();
        lexer.next_token(&true).unwrap();
        lexer.next_token(&true).unwrap();
        let err = lexer.next_token(&true).unwrap_err();
        assert!(matches!(
            err,
            LexError::UnbalancedAtEof {
                offset: 3,
                depth: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_slash_asks_context_once() {
        use std::cell::Cell;
        let calls = Cell::new(0);
        let ctx = || -> Result<bool, ContextError> {
            calls.set(calls.get() + 1);
            Ok(true)
        };
        let mut lexer = Lexer::from_str("a /= b");
        lexer.next_token(&ctx).unwrap();
        assert_eq!(calls.get(), 0);
        let tok = lexer.next_token(&ctx).unwrap();
        assert_eq!(tok.kind, TokenKind::Op);
        assert_eq!(tok.len(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_comment_slash_does_not_ask_context() {
        let ctx = || -> Result<bool, ContextError> { Err("should not be asked".into()) };
        let mut lexer = Lexer::from_str("// x\n/* y */");
        assert_eq!(lexer.next_token(&ctx).unwrap().kind, TokenKind::Comment);
        assert_eq!(lexer.next_token(&ctx).unwrap().kind, TokenKind::Comment);
    }

    #[test]
    fn test_context_failure_propagates() {
        let ctx = || -> Result<bool, ContextError> { Err("parser stack empty".into()) };
        let mut lexer = Lexer::from_str("  /x/");
        let err = lexer.next_token(&ctx).unwrap_err();
        match err {
            LexError::ContextQuery { offset, source, .. } => {
                assert_eq!(offset, 2);
                assert_eq!(source.to_string(), "parser stack empty");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classification_failure() {
        for src in ["#", "@", "\0", "a \u{7f}"] {
            let mut lexer = Lexer::from_str(src);
            let result = loop {
                match lexer.next_token(&true) {
                    Ok(tok) if tok.is_eof() => break Ok(()),
                    Ok(_) => continue,
                    Err(err) => break Err(err),
                }
            };
            assert!(
                matches!(result, Err(LexError::Classification { .. })),
                "{src:?}"
            );
        }
    }

    #[test]
    fn test_failed_template_brace_is_retried() {
        let config = LexerConfig::default().with_max_depth(0);
        let mut lexer = Lexer::with_config(b"`a${b}`", config);
        assert_eq!(lexer.next_token(&false).unwrap().kind, TokenKind::String);
        for _ in 0..2 {
            let err = lexer.next_token(&false).unwrap_err();
            assert!(matches!(err, LexError::NestingOverflow { offset: 2, limit: 0, .. }));
        }
    }

    #[test]
    fn test_mixed_statement() {
        let toks = kinds("x = a ? [1, .5] : {...y};");
        let got: Vec<_> = toks.iter().map(|(k, t)| (*k, t.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Lit, "x"),
                (TokenKind::Op, "="),
                (TokenKind::Lit, "a"),
                (TokenKind::Ternary, "?"),
                (TokenKind::Array, "["),
                (TokenKind::Number, "1"),
                (TokenKind::Comma, ","),
                (TokenKind::Number, ".5"),
                (TokenKind::Close, "]"),
                (TokenKind::Colon, ":"),
                (TokenKind::Brace, "{"),
                (TokenKind::Spread, "..."),
                (TokenKind::Lit, "y"),
                (TokenKind::Close, "}"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }
}
