//! jscan-lex - Lexical Analyzer for JavaScript-family Source
//!
//! This crate provides a single-pass, zero-copy tokenizer meant to feed an
//! incremental, stack-driven parser. Tokens are spans into the caller's
//! buffer; nothing is copied or decoded.
//!
//! # Overview
//!
//! Four JavaScript ambiguities are settled while scanning, without a
//! pre-pass:
//!
//! - **regex or division**: `/` asks a [`ValueContext`] supplied by the
//!   caller, because only the parser knows whether the previous token ended
//!   an expression
//! - **template substitutions**: `` `a${b}c` `` is split into literal
//!   segments around a synthetic [`TokenKind::TemplateBrace`], tracked by a
//!   bounded nesting stack that remembers which `{` levels were `${`
//! - **labels**: identifier-like tokens carry [`Token::label_hint`] when the
//!   next significant byte is `:`
//! - **ASI lookahead**: comments are tokens and every token records its
//!   start line, so a parser can see line breaks between tokens
//!
//! # Example Usage
//!
//! ```
//! use jscan_lex::{Lexer, PrecedingToken, TokenKind};
//!
//! let source = b"loop: for (;;) { x = y / 2; }";
//! let mut lexer = Lexer::new(source);
//! let mut ctx = PrecedingToken::new();
//!
//! let label = lexer.next_token(&ctx).unwrap();
//! assert_eq!(label.kind, TokenKind::Lit);
//! assert!(label.label_hint);
//!
//! // Drive the lexer by hand, feeding the context as we go
//! let mut count = 1;
//! ctx.observe(&label, lexer.text(&label));
//! loop {
//!     let tok = lexer.next_token(&ctx).unwrap();
//!     if tok.kind == TokenKind::Eof {
//!         break;
//!     }
//!     ctx.observe(&tok, lexer.text(&tok));
//!     count += 1;
//! }
//! assert_eq!(count, 15);
//! assert_eq!(lexer.depth(), 0);
//! ```
//!
//! # Module Structure
//!
//! - [`lexer`] - [`Lexer`], its state and the classifier
//! - [`token`] - [`Token`] and [`TokenKind`]
//! - [`context`] - the [`ValueContext`] boundary
//! - [`stack`] - the bounded nesting stack
//! - [`cursor`] - byte cursor with line tracking
//! - [`chars`] - byte classification
//! - [`config`] - [`LexerConfig`]
//! - [`error`] - [`LexError`]
//!
//! # Permissive Input
//!
//! Unterminated comments, strings and regexes run to the end of input.
//! Numbers are not validated, and raw newlines are accepted in strings and
//! regexes. None of these are errors here. Errors are reserved for bracket
//! imbalance, nesting overflow, bytes that start no token, and a failing
//! value-context query.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod context;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stack;
pub mod token;

mod edge_cases;

pub use config::LexerConfig;
pub use context::{ContextError, PrecedingToken, ValueContext};
pub use error::{LexError, LexResult};
pub use lexer::{Lexer, LexerState, Pending, Tokens};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Collect every token up to (not including) EOF with a fixed context.
    fn lex_all(source: &[u8], value: bool) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token(&value).unwrap();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    fn texts<'a>(source: &'a [u8], tokens: &[Token]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(|t| std::str::from_utf8(t.text(source)).unwrap())
            .collect()
    }

    #[test]
    fn test_regex_when_not_value_context() {
        let src = b"/abc/g";
        let toks = lex_all(src, false);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Regexp);
        assert_eq!(toks[0].len(), src.len());
    }

    #[test]
    fn test_division_when_value_context() {
        let src = b"/abc/g";
        let toks = lex_all(src, true);
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Op, TokenKind::Lit, TokenKind::Op, TokenKind::Lit]
        );
        assert_eq!(texts(src, &toks), vec!["/", "abc", "/", "g"]);
    }

    #[test]
    fn test_template_round_trip() {
        let src = b"`a${b}c`";
        let mut lexer = Lexer::new(src);
        let mut seen = Vec::new();
        loop {
            let tok = lexer.next_token(&false).unwrap();
            if tok.is_eof() {
                break;
            }
            seen.push((tok.kind, lexer.text(&tok), lexer.state().pending()));
        }
        assert_eq!(
            seen,
            vec![
                (TokenKind::String, &b"`a"[..], Pending::TemplateBrace),
                (TokenKind::TemplateBrace, &b"${"[..], Pending::None),
                (TokenKind::Lit, &b"b"[..], Pending::None),
                (TokenKind::Close, &b"}"[..], Pending::ResumeLiteral),
                (TokenKind::String, &b"c`"[..], Pending::None),
            ]
        );
        assert_eq!(lexer.depth(), 0);
    }

    #[test]
    fn test_nested_templates() {
        let src = b"`x${ `y${z}` }w`";
        let toks = lex_all(src, false);
        assert_eq!(
            texts(src, &toks),
            vec!["`x", "${", "`y", "${", "z", "}", "`", "}", "w`"]
        );
    }

    #[test]
    fn test_object_literal_inside_substitution() {
        let src = b"`${ {a: 1}.a }!`";
        let toks = lex_all(src, false);
        assert_eq!(
            texts(src, &toks),
            vec!["`", "${", "{", "a", ":", "1", "}", ".", "a", "}", "!`"]
        );
        assert!(toks[3].label_hint);
    }

    #[test]
    fn test_label_hint() {
        let toks = lex_all(b"foo: bar", false);
        assert_eq!(toks[0].kind, TokenKind::Lit);
        assert!(toks[0].label_hint);
        assert!(!toks[2].label_hint);

        let toks = lex_all(b"foo + bar", false);
        assert!(!toks[0].label_hint);
    }

    #[test]
    fn test_line_counting_across_block_comment() {
        let src = b"/* \n \n */ x";
        let toks = lex_all(src, false);
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].line, 1);
        let newlines = src.iter().filter(|&&b| b == b'\n').count() as u32;
        assert_eq!(toks[1].line, toks[0].line + newlines);
        assert_eq!(toks[1].line, 3);
    }

    #[test]
    fn test_lines_in_strings_and_regexes() {
        let src = b"'a\\\nb'\n/x\n/ y\n`\n${\nz}\n` w";
        let toks = lex_all(src, false);
        let lines: Vec<_> = toks.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::String, 1),
                (TokenKind::Regexp, 3),
                (TokenKind::Lit, 4),
                (TokenKind::String, 5),
                (TokenKind::TemplateBrace, 6),
                (TokenKind::Lit, 7),
                (TokenKind::Close, 7),
                (TokenKind::String, 7),
                (TokenKind::Lit, 8),
            ]
        );
    }

    #[test]
    fn test_overflow_exactly_at_limit_plus_one() {
        let limit = 8;
        for opener in ["(", "[", "{"] {
            let src = opener.repeat(limit + 1);
            let config = LexerConfig::default().with_max_depth(limit);
            let mut lexer = Lexer::with_config(src.as_bytes(), config);
            for _ in 0..limit {
                lexer.next_token(&false).unwrap();
            }
            let err = lexer.next_token(&false).unwrap_err();
            assert!(
                matches!(err, LexError::NestingOverflow { offset, limit: l, .. }
                    if offset == limit && l == limit),
                "{opener}: {err:?}"
            );
        }
    }

    #[test]
    fn test_overflow_by_template_substitutions() {
        let config = LexerConfig::default().with_max_depth(2);
        let src = b"`${`${`${x}`}`}`";
        let mut lexer = Lexer::with_config(src, config);
        let err = loop {
            match lexer.next_token(&false) {
                Ok(tok) => assert!(!tok.is_eof()),
                Err(err) => break err,
            }
        };
        assert!(matches!(err, LexError::NestingOverflow { offset: 7, limit: 2, .. }));
    }

    #[test]
    fn test_extra_closer_underflows_at_its_offset() {
        let src = b"f(a)) + 1";
        let mut lexer = Lexer::new(src);
        for _ in 0..4 {
            lexer.next_token(&true).unwrap();
        }
        let err = lexer.next_token(&true).unwrap_err();
        assert!(matches!(err, LexError::NestingUnderflow { offset: 4, line: 1 }));
    }

    #[test]
    fn test_errors_are_deterministic() {
        let mut lexer = Lexer::from_str("a\n  #");
        lexer.next_token(&true).unwrap();
        let first = lexer.next_token(&true).unwrap_err();
        let second = lexer.next_token(&true).unwrap_err();
        assert_eq!(first.offset(), 4);
        assert_eq!(first.line(), 2);
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.offset(), second.offset());
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        let mut lexer = Lexer::new(b"a\0b");
        lexer.next_token(&true).unwrap();
        assert!(matches!(
            lexer.next_token(&true),
            Err(LexError::Classification { offset: 1, .. })
        ));

        // inside a string it is just a byte
        let toks = lex_all(b"'\0' x", true);
        assert_eq!(toks[0].len(), 3);
    }

    /// Printable ASCII mixed with JS punctuation, balanced or not.
    fn js_like() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![
                proptest::sample::select(b" \n/*`${}()\\'.:=".to_vec()),
                b'a'..=b'z',
                b'0'..=b'9',
            ],
            0..64,
        )
    }

    proptest! {
        #[test]
        fn prop_spans_reconstruct_input(src in js_like(), value in any::<bool>()) {
            let mut lexer = Lexer::new(&src);
            let mut rebuilt = Vec::new();
            let mut cursor = 0;
            loop {
                let tok = match lexer.next_token(&value) {
                    Ok(tok) => tok,
                    Err(_) => break,
                };
                prop_assert!(tok.span.offset >= cursor);
                prop_assert!(tok.span.end() <= src.len());
                // only whitespace between tokens
                prop_assert!(src[cursor..tok.span.offset]
                    .iter()
                    .all(|&b| chars::is_space(b)));
                rebuilt.extend_from_slice(&src[cursor..tok.span.offset]);
                rebuilt.extend_from_slice(lexer.text(&tok));
                cursor = tok.span.end();
                if tok.is_eof() {
                    prop_assert_eq!(&rebuilt, &src);
                    break;
                }
            }
        }

        #[test]
        fn prop_never_panics(src in proptest::collection::vec(any::<u8>(), 0..128)) {
            let mut lexer = Lexer::new(&src);
            for _ in 0..=src.len() + 1 {
                match lexer.next_token(&false) {
                    Ok(tok) if tok.is_eof() => break,
                    Ok(_) => {},
                    Err(_) => break,
                }
            }
        }

        #[test]
        fn prop_balanced_brackets_end_empty(depth in 0usize..40, kinds in proptest::collection::vec(0u8..3, 40)) {
            let open: String = kinds[..depth]
                .iter()
                .map(|k| ['(', '[', '{'][*k as usize])
                .collect();
            let close: String = kinds[..depth]
                .iter()
                .rev()
                .map(|k| [')', ']', '}'][*k as usize])
                .collect();
            let src = format!("{open}x{close}");
            let toks = lex_all(src.as_bytes(), true);
            prop_assert_eq!(toks.len(), 2 * depth + 1);

            let mut lexer = Lexer::from_str(&src);
            let mut max_depth = 0;
            loop {
                let tok = lexer.next_token(&true).unwrap();
                max_depth = max_depth.max(lexer.depth());
                if tok.is_eof() {
                    break;
                }
            }
            prop_assert_eq!(max_depth, depth);
            prop_assert_eq!(lexer.depth(), 0);
        }

        #[test]
        fn prop_peek_matches_next(src in js_like()) {
            let mut plain = Lexer::new(&src);
            let mut peeking = Lexer::new(&src);
            loop {
                let expected = plain.next_token(&true);
                // peek before every other token
                if plain.position() % 2 == 0 {
                    let _ = peeking.peek(&true);
                }
                let got = peeking.next_token(&true);
                match (expected, got) {
                    (Ok(a), Ok(b)) => {
                        prop_assert_eq!(a, b);
                        if a.is_eof() {
                            break;
                        }
                    },
                    (Err(a), Err(b)) => {
                        prop_assert_eq!(a.offset(), b.offset());
                        break;
                    },
                    (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
                }
            }
        }
    }
}
