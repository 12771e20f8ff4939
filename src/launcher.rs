//! Running the target command.
//!
//! The child inherits stdin, stdout and stderr, so the wrapper adds nothing
//! to the command's I/O. Its exit code becomes the wrapper's exit code.

use crate::error::{Result, RunnerError};
use crate::exit_codes;
use std::process::{Command, Stdio};

/// Render the dry-run line for a command and its final arguments.
pub fn describe(program: &str, args: &[String]) -> String {
    format!("Command: {} {}", program, args.join(" "))
}

/// Run `program` with `args` and wait for it to finish.
///
/// # Returns
///
/// * `Ok(code)` - The child's exit code, or [`exit_codes::UNKNOWN_CHILD_STATUS`]
///   when it has none (e.g. terminated by a signal)
/// * `Err(RunnerError::Spawn)` - The command could not be started
pub fn run_command(program: &str, args: &[String]) -> Result<i32> {
    tracing::info!(program, ?args, "running command");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| RunnerError::Spawn {
            program: program.to_string(),
            source,
        })?;

    match status.code() {
        Some(code) => {
            tracing::debug!(program, code, "command exited");
            Ok(code)
        }
        None => {
            tracing::warn!(program, %status, "command exited without a status code");
            Ok(exit_codes::UNKNOWN_CHILD_STATUS)
        }
    }
}
