//! Command-line driver for Soma.
//!
//! [`run`] receives the arguments after the program name and returns the
//! text to print on stdout. The `soma` binary only maps that result onto
//! output streams and exit codes, which keeps every command testable
//! without spawning a process.

use thiserror::Error;

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

/// Release version shown by `soma version` and the usage banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Why a command line could not be executed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CliError {
    /// No command was given, or the first argument was a flag.
    #[error("usage")]
    Usage,
    /// The first argument names no known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => 2,
            CliError::UnknownCommand(_) => 1,
        }
    }
}

/// Execute a command line, excluding the program name.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<String, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage);
    };
    let command = command.as_ref();
    if command.starts_with('-') {
        return Err(CliError::Usage);
    }

    tracing::debug!(command, args = rest.len(), "running command");
    match command {
        "tokens" => Ok(commands::tokens(rest)),
        "help" => Ok(usage()),
        "version" => Ok(format!("Social Machines v{VERSION}")),
        _ => Err(CliError::UnknownCommand(command.to_string())),
    }
}

/// Top-level usage text.
pub fn usage() -> String {
    format!(
        "\
Social Machines v{VERSION}

Usage:
    soma [command [arguments*]]

Command:
    tokens    Prints the list of tokens for a provided string

Use \"soma <command> -h\" for more information about the command
"
    )
}
