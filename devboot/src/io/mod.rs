//! I/O helpers for the bootstrap steps and the CLI.

pub mod env_file;
pub mod layout;
pub mod process;
pub mod settings;
pub mod venv;
pub mod workspace;
