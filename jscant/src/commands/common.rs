//! Shared helpers for jscant commands.

use std::io::Read;
use std::path::Path;

use jscan_lex::LexError;
use jscan_util::{Diagnostic, DiagnosticBuilder, SourceFile};

use crate::error::{JscantError, Result};

/// Name shown in diagnostics when reading from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// An input buffer together with the name used to report it.
#[derive(Debug, Clone)]
pub struct Input {
    /// Display name (path or [`STDIN_NAME`])
    pub name: String,
    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl Input {
    /// Read a file, or standard input when `path` is `None` or `-`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path != Path::new("-") => {
                if !path.is_file() {
                    return Err(JscantError::InvalidInput(format!(
                        "Input path is not a file: {}",
                        path.display()
                    )));
                }
                let bytes = std::fs::read(path)?;
                Ok(Self {
                    name: path.display().to_string(),
                    bytes,
                })
            }
            _ => {
                let mut bytes = Vec::new();
                std::io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(Self {
                    name: STDIN_NAME.to_string(),
                    bytes,
                })
            }
        }
    }
}

/// Build the diagnostic for a lexical error.
pub fn lex_diagnostic(err: &LexError) -> Diagnostic {
    let mut builder = DiagnosticBuilder::error(err.message())
        .code(err.code())
        .span(err.span());
    match err {
        LexError::NestingOverflow { limit, .. } => {
            builder = builder.help(format!(
                "raise `lexer.max_depth` in jscant.toml (currently {})",
                limit
            ));
        }
        LexError::NestingUnderflow { .. } => {
            builder = builder.note("no bracket or substitution is open here");
        }
        _ => {}
    }
    builder.build()
}

/// Render `err` against `input` as a compiler-style diagnostic.
pub fn render_lex_error(input: &Input, err: &LexError) -> String {
    let file = SourceFile::new(0, input.name.as_str(), input.bytes.as_slice());
    lex_diagnostic(err).render(&file)
}

/// Print the diagnostic for `err` to stderr and turn it into a CLI error.
pub fn report_lex_error(input: &Input, err: &LexError) -> JscantError {
    eprint!("{}", render_lex_error(input, err));
    JscantError::Lex {
        path: input.name.clone(),
        message: err.message(),
    }
}
