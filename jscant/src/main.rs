//! jscant - command-line front end for the jscan lexer.
//!
//! `trace` prints the token stream of a file (or stdin), and `check`
//! tokenizes a batch of files and reports which ones fail.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_trace, CheckArgs, TraceArgs};
use config::{Config, TraceFormat};
use error::{JscantError, Result};

/// jscant - tokenize JavaScript-family source
#[derive(Parser, Debug)]
#[command(name = "jscant")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize JavaScript-family source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JSCANT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JSCANT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JSCANT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jscant CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one line per token
    ///
    /// Reads FILE, or standard input when FILE is omitted or `-`, and
    /// stops with a diagnostic at the first lexical error.
    Trace(TraceCommand),

    /// Tokenize files to the end of input
    ///
    /// Prints `ok <path> (<n> tokens)` for each file that tokenizes
    /// cleanly and a diagnostic for each that does not.
    Check(CheckCommand),
}

/// Arguments for the trace subcommand.
#[derive(Parser, Debug)]
struct TraceCommand {
    /// Input file (default: stdin)
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<TraceFormat>,

    /// Leave comment tokens out of the trace
    #[arg(long)]
    no_comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with trace output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JscantError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Trace(args) => execute_trace(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

fn execute_trace(args: TraceCommand, config: Config) -> Result<()> {
    let trace_args = TraceArgs {
        input: args.file,
        format: args.format.unwrap_or(config.trace.format),
        show_comments: config.trace.show_comments && !args.no_comments,
        indent: config.trace.indent,
        lexer: config.lexer_config(),
    };
    run_trace(trace_args)
}

fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        inputs: args.files,
        lexer: config.lexer_config(),
    };
    run_check(check_args)
}
