//! `jscant trace` - print the token stream of one input.
//!
//! Text output is one line per token:
//!
//! ```text
//! lit       :| loop
//! colon      | :
//! lit        | for
//! paren      | (
//! semicolon  |   ;
//! ```
//!
//! The kind name fills ten columns, the next column holds `:` when the
//! token looks like a label, and the token text is indented by the number
//! of brackets currently open. The end-of-input token is not printed.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use jscan_lex::{Lexer, LexerConfig, Token, TokenKind};
use serde::Serialize;
use tracing::{debug, info};

use super::common::{report_lex_error, Input};
use crate::config::TraceFormat;
use crate::error::Result;

/// Arguments for the trace command.
#[derive(Debug, Clone)]
pub struct TraceArgs {
    /// Input file, or stdin when absent
    pub input: Option<PathBuf>,
    /// Output format
    pub format: TraceFormat,
    /// Print comment tokens
    pub show_comments: bool,
    /// Spaces per nesting level
    pub indent: usize,
    /// Lexer limits
    pub lexer: LexerConfig,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    kind: &'static str,
    line: u32,
    offset: usize,
    len: usize,
    depth: usize,
    label: bool,
    text: Cow<'a, str>,
}

/// Formats tokens while tracking the bracket depth shown to the reader.
///
/// The depth here is owned by the printer, not read from the lexer: it
/// goes up after an opener is printed and down before a closer is, so a
/// bracket pair lines up at the same indentation.
#[derive(Debug, Clone)]
pub struct Tracer {
    format: TraceFormat,
    indent: usize,
    depth: usize,
}

impl Tracer {
    /// Create a tracer.
    pub fn new(format: TraceFormat, indent: usize) -> Self {
        Self {
            format,
            indent,
            depth: 0,
        }
    }

    /// Current printer depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Format one token, updating the depth.
    pub fn line(&mut self, token: &Token, text: &[u8]) -> Result<String> {
        if token.kind.is_closer() {
            self.depth = self.depth.saturating_sub(1);
        }

        let text = String::from_utf8_lossy(text);
        let line = match self.format {
            TraceFormat::Text => {
                let hint = if token.label_hint { ':' } else { ' ' };
                format!(
                    "{:<10}{}| {:width$}{}",
                    token.kind.name(),
                    hint,
                    "",
                    text,
                    width = self.depth * self.indent
                )
            }
            TraceFormat::Json => serde_json::to_string(&JsonToken {
                kind: token.kind.name(),
                line: token.line,
                offset: token.offset(),
                len: token.len(),
                depth: self.depth,
                label: token.label_hint,
                text,
            })?,
        };

        if token.kind.is_opener() {
            self.depth += 1;
        }
        Ok(line)
    }
}

/// Run the trace command.
pub fn run_trace(args: TraceArgs) -> Result<()> {
    let input = Input::read(args.input.as_deref())?;
    info!(input = %input.name, bytes = input.bytes.len(), "tracing");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_trace(&input, &args, &mut out);
    out.flush()?;
    result
}

/// Write the trace of `input` to `out`, stopping at the first lexical error.
pub fn write_trace<W: Write>(input: &Input, args: &TraceArgs, out: &mut W) -> Result<()> {
    let mut lexer = Lexer::with_config(&input.bytes, args.lexer);
    let mut tracer = Tracer::new(args.format, args.indent);
    let mut count = 0usize;

    for token in lexer.tokens() {
        let token = match token {
            Ok(token) => token,
            Err(err) => {
                out.flush()?;
                return Err(report_lex_error(input, &err));
            }
        };
        if token.is_eof() {
            break;
        }
        if token.kind == TokenKind::Comment && !args.show_comments {
            continue;
        }
        let line = tracer.line(&token, token.text(&input.bytes))?;
        writeln!(out, "{}", line)?;
        count += 1;
    }

    debug!(tokens = count, depth = tracer.depth(), "trace finished");
    Ok(())
}
