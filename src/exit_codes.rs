//! Exit code constants for the c7r CLI.
//!
//! The wrapper only owns two codes of its own:
//! - 0: Success (dry run, or nothing went wrong before the child ran)
//! - 1: Any wrapper error (bad args, unreadable config, spawn failure)
//!
//! When the target command runs, its own exit code is passed through.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unusable config, or the command could not start.
pub const USER_ERROR: i32 = 1;

/// Used when the child exited without a code (e.g. killed by a signal).
pub const UNKNOWN_CHILD_STATUS: i32 = 1;
