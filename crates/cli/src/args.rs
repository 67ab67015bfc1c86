//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyroute")]
#[command(about = "Inspect and exercise the keyroute command/gesture engine", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keyroute commands --owner ApplicationCommands\n  keyroute convert 'Ctrl+Shift+F14'\n  keyroute convert EditingCommands.Delete\n  keyroute simulate scenario.json\n  keyroute interactive\n"
)]
pub struct Cli {
    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table", env = "KEYROUTE_OUTPUT")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the standard command library and its default gestures
    Commands {
        /// Only show commands of this owner (e.g. ApplicationCommands)
        #[arg(long)]
        owner: Option<String>,

        /// Only show commands that have at least one default gesture
        #[arg(long)]
        with_gestures: bool,
    },

    /// Convert a gesture or command token to its canonical form
    Convert {
        /// A gesture string ("Ctrl+Shift+X", "Alt+RightClick") or a
        /// command token ("Copy", "EditingCommands.Delete")
        input: String,
    },

    /// Replay a JSON scenario through the matcher and dispatcher and
    /// verify the recorded responses
    Simulate {
        /// Path to the scenario file
        script: PathBuf,

        /// Print each response as it is recorded
        #[arg(short, long)]
        verbose: bool,
    },

    /// Read keys from the terminal and print the command each one
    /// resolves to (Ctrl+Q exits)
    Interactive {
        /// Optional JSON file of binding overrides to apply first
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
}
