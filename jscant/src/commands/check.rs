//! `jscant check` - tokenize files to the end and report pass or fail.
//!
//! Every file is checked even after a failure, so one run lists all the
//! broken inputs. Passing files print `ok <path> (<n> tokens)` on stdout;
//! failing ones print a diagnostic on stderr.

use std::path::PathBuf;

use jscan_lex::{LexError, Lexer, LexerConfig};
use jscan_util::{DiagnosticBuilder, Handler, SourceMap};
use tracing::debug;

use super::common::{lex_diagnostic, Input};
use crate::error::{JscantError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to tokenize
    pub inputs: Vec<PathBuf>,
    /// Lexer limits
    pub lexer: LexerConfig,
}

/// Count the tokens of `source`, excluding the end-of-input token.
pub fn count_tokens(source: &[u8], config: LexerConfig) -> std::result::Result<usize, LexError> {
    let mut lexer = Lexer::with_config(source, config);
    let mut count = 0;
    for token in lexer.tokens() {
        if !token?.is_eof() {
            count += 1;
        }
    }
    Ok(count)
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let mut sources = SourceMap::new();
    let handler = Handler::new();

    for path in &args.inputs {
        let input = match Input::read(Some(path)) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("error: {}", err);
                handler.emit_diagnostic(DiagnosticBuilder::error(err.to_string()).build());
                continue;
            }
        };

        let id = sources.add(input.name, input.bytes);
        let Some(file) = sources.get(id) else {
            continue;
        };

        match count_tokens(file.content(), args.lexer) {
            Ok(count) => {
                debug!(file = file.id().0, path = file.name(), tokens = count, "check passed");
                println!("ok {} ({} tokens)", file.name(), count);
            }
            Err(err) => {
                debug!(
                    file = file.id().0,
                    path = file.name(),
                    code = %err.code(),
                    "check failed"
                );
                let diagnostic = lex_diagnostic(&err);
                eprint!("{}", diagnostic.render(file));
                handler.emit_diagnostic(diagnostic);
            }
        }
    }

    if handler.has_errors() {
        return Err(JscantError::FilesFailed(handler.error_count()));
    }
    Ok(())
}
