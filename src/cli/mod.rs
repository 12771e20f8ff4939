//! CLI argument parsing for c7r.
//!
//! Uses clap derive macros for the wrapper's own flags. Because `--config`
//! and `--dry-run` may also appear after the target command, the trailing
//! arguments are scanned once more in [`Cli::into_invocation`].

use crate::error::{Result, RunnerError};
use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;


/// One-line usage shown after argument errors.
pub const USAGE: &str = "c7r <command> [args...] --config <config.yaml> [--dry-run]";

/// c7r: run a command with arguments compiled from a YAML config file.
///
/// Config items are expanded against the environment and appended after any
/// arguments given on the command line. The command's exit code is returned.
#[derive(Parser, Debug)]
#[command(name = "c7r")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = USAGE)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Path to the YAML config file (may also follow the command).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the final command line instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run, followed by arguments passed through to it.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// A fully resolved wrapper invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: PathBuf,
    pub dry_run: bool,
    pub command: String,
    /// Arguments forwarded ahead of the config arguments, in command-line order.
    pub passthrough: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// `--help` and `--version` print and exit here. Any other clap error
    /// becomes a [`RunnerError::Usage`] so it exits like every wrapper error.
    pub fn parse_args() -> Result<Self> {
        Cli::try_parse().map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => usage_from_clap(&err),
        })
    }

    /// Resolve the wrapper flags and split the command from its arguments.
    ///
    /// `--config <path>`, `--config=<path>` and `--dry-run` are honoured
    /// anywhere in the trailing arguments; the last `--config` wins. The
    /// command is the first remaining argument not starting with `-`.
    pub fn into_invocation(self) -> Result<Invocation> {
        let mut config = self.config;
        let mut dry_run = self.dry_run;
        let mut rest = Vec::with_capacity(self.args.len());

        let mut args = self.args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                match args.next() {
                    Some(path) => config = Some(PathBuf::from(path)),
                    // A dangling `--config` is left for the command.
                    None => rest.push(arg),
                }
            } else if let Some(path) = arg.strip_prefix("--config=") {
                config = (!path.is_empty()).then(|| PathBuf::from(path));
            } else if arg == "--dry-run" {
                dry_run = true;
            } else {
                rest.push(arg);
            }
        }

        let config = config
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| RunnerError::Usage("--config flag is required".to_string()))?;

        let position = rest
            .iter()
            .position(|arg| !arg.starts_with('-'))
            .ok_or_else(|| RunnerError::Usage("no command specified".to_string()))?;
        let command = rest.remove(position);

        Ok(Invocation {
            config,
            dry_run,
            command,
            passthrough: rest,
        })
    }
}

/// Convert a clap parse error into the wrapper's usage error.
///
/// `--config` without a value reports the same message as a missing
/// `--config`; other errors keep clap's first line without its prefix.
pub fn usage_from_clap(err: &clap::Error) -> RunnerError {
    let invalid_arg = err.get(ContextKind::InvalidArg).map(|arg| arg.to_string());
    if err.kind() == ErrorKind::InvalidValue
        && invalid_arg.is_some_and(|arg| arg.starts_with("--config"))
    {
        return RunnerError::Usage("--config flag is required".to_string());
    }

    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    RunnerError::Usage(first_line.trim_start_matches("error: ").to_string())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `-v` count.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // Logs go to stderr so they never interleave with the command's stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
