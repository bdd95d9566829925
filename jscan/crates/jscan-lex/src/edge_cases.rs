//! Edge case tests for jscan-lex
