//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish failure modes.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

/// Structured exit codes for the keyroute binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Input could not be parsed (bad gesture or command token,
    /// malformed scenario file).
    ///
    /// Scripts should fix the input and not retry.
    InvalidInput = 2,

    /// A simulation ran but produced responses that differ from the
    /// scenario's expectations.
    ScenarioMismatch = 3,

    /// A file could not be read.
    IoError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
