//! Command modules for the jscant CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct and a
//! `run_*` entry point; `common` holds input reading and diagnostics.

pub mod common;

pub mod check;
pub mod trace;

pub use check::{run_check, CheckArgs};
pub use trace::{run_trace, TraceArgs};
