//! Stable exit codes for the devboot CLI.

/// Environment bootstrapped (or the wrapped command exited 0).
pub const OK: i32 = 0;
/// `<base>/venv` is missing or not a directory.
pub const ENVIRONMENT_NOT_FOUND: i32 = 1;
/// `<base>/config.env` could not be read or has a malformed line.
pub const CONFIG_PARSE: i32 = 2;
/// `<base>/workspace` is missing or not a directory.
pub const WORKSPACE_NOT_FOUND: i32 = 3;
/// Invalid command line or settings file.
pub const INVALID: i32 = 4;
/// The wrapped command could not be started.
pub const SPAWN_FAILED: i32 = 5;
