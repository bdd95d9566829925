//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - the public [`Lexer`] with peek, update and iteration
//! - `state` - [`LexerState`] and the scan driver
//! - `classify` - dispatch deciding each token's kind and length
//! - `comment`, `operator`, `string`, `number`, `regex`, `identifier` -
//!   scanners for each token family
//! - `lookahead` - the label hint probe

mod classify;
mod comment;
mod core;
mod identifier;
mod lookahead;
mod number;
mod operator;
mod regex;
mod state;
mod string;

pub use self::core::{Lexer, Tokens};
pub use self::state::{LexerState, Pending};
