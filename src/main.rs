//! c7r: run a command with arguments compiled from a YAML config file.
//!
//! This is the main entry point for the `c7r` CLI. It parses arguments,
//! loads and compiles the config, then runs the target command (or prints
//! it on `--dry-run`) and exits with the command's exit code.

mod cli;
pub mod compile;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod launcher;

use cli::{Cli, Invocation};
use error::{Result, RunnerError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => return report(err),
    };
    cli::init_logging(cli.verbose);

    match cli.into_invocation().and_then(run) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::USER_ERROR as u8)),
        Err(err) => report(err),
    }
}

/// Print a user-actionable error message to stderr and pick the exit code.
fn report(err: RunnerError) -> ExitCode {
    eprintln!("Error: {}", err);
    if matches!(err, RunnerError::Usage(_)) {
        eprintln!("Usage: {}", cli::USAGE);
    }

    ExitCode::from(err.exit_code() as u8)
}

/// Load the config, build the final argument vector and hand it to the launcher.
fn run(invocation: Invocation) -> Result<i32> {
    let items = config::load(&invocation.config)?;

    // Command-line arguments come first, config arguments after them.
    let mut args = invocation.passthrough;
    args.extend(compile::compile(&items));

    if invocation.dry_run {
        println!("{}", launcher::describe(&invocation.command, &args));
        return Ok(exit_codes::SUCCESS);
    }

    launcher::run_command(&invocation.command, &args)
}
