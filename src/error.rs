//! Error types for the c7r CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for c7r operations.
///
/// Every variant is terminal: nothing is retried, the message is printed and
/// the process exits with [`RunnerError::exit_code`].
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The config file could not be read.
    #[error("failed to read config file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML, or matches neither document shape.
    #[error("failed to parse config YAML: {0}")]
    Parse(String),

    /// A top-level entry of a bare-sequence document is neither a mapping nor a string.
    #[error("unsupported config item type: {0}")]
    UnsupportedItemType(String),

    /// The wrapper's own command line is unusable.
    #[error("{0}")]
    Usage(String),

    /// The target command could not be started.
    #[error(
        "failed to execute command '{program}': {source}\nFix: ensure the command is installed and in PATH."
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::Read { .. } => exit_codes::USER_ERROR,
            RunnerError::Parse(_) => exit_codes::USER_ERROR,
            RunnerError::UnsupportedItemType(_) => exit_codes::USER_ERROR,
            RunnerError::Usage(_) => exit_codes::USER_ERROR,
            RunnerError::Spawn { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for c7r operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
