//! Development environment bootstrapper.
//!
//! Activates a project's virtual environment, loads `config.env`, and moves the
//! session into the project's workspace. Since a child process cannot modify
//! its parent shell, the result is returned as data and rendered as statements
//! for the shell to evaluate:
//!
//! ```bash
//! eval "$(devboot)"
//! ```
//!
//! - **[`core`]**: Pure, deterministic logic (config parsing, mutation merging,
//!   activation, shell rendering). No I/O.
//! - **[`io`]**: Filesystem and process access.
//!
//! [`bootstrap`] runs the steps in order and stops at the first failure.

pub mod bootstrap;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
