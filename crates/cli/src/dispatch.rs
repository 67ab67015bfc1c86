//! Subcommand routing.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Map results and error categories onto structured exit codes.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use keyroute_engine::{FormatError, GestureError};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch the parsed CLI to its handler and reduce the result to an
/// exit code.
pub fn run_command(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Commands::Commands {
            ref owner,
            with_gestures,
        } => commands::list::run(owner.as_deref(), with_gestures, &cli.output).map(|_| true),
        Commands::Convert { ref input } => {
            commands::convert::run(input, &cli.output).map(|_| true)
        }
        Commands::Simulate {
            ref script,
            verbose,
        } => commands::simulate::run(script, verbose),
        Commands::Interactive { ref overrides } => {
            commands::interactive::run(overrides.as_deref()).map(|_| true)
        }
    };

    match result {
        Ok(true) => ExitCode::Success,
        Ok(false) => ExitCode::ScenarioMismatch,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Categorize an error chain into an exit code.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    for cause in error.chain() {
        if cause.is::<FormatError>()
            || cause.is::<GestureError>()
            || cause.is::<keyroute_config::OverrideError>()
            || cause.is::<serde_json::Error>()
        {
            return ExitCode::InvalidInput;
        }
        if cause.is::<std::io::Error>() {
            return ExitCode::IoError;
        }
    }
    ExitCode::GeneralError
}
