//! keyroute - command/gesture engine inspection tool.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - List library commands, canonicalize tokens, replay scenarios, and
//!   resolve live keys via the shared engine crate.
//!
//! Does NOT handle:
//! - Engine semantics (see `crates/engine`).
//!
//! Invariants:
//! - Logging goes to stderr so table/JSON output stays pipeable.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod scenario;
mod term;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use dispatch::run_command;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let code = run_command(cli);
    std::process::exit(code.as_i32());
}
