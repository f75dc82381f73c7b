//! Terminal failures of the bootstrap steps.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::env_file::LineError;
use crate::exit_codes;

/// Errors returned by [`crate::bootstrap::bootstrap`].
///
/// Every variant is fatal; none is retried.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("virtual environment not found: {} is missing or not a directory", path.display())]
    EnvironmentNotFound { path: PathBuf },

    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: LineError,
    },

    #[error("workspace not found: {} is missing or not a directory", path.display())]
    WorkspaceNotFound { path: PathBuf },
}

impl BootstrapError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EnvironmentNotFound { .. } => exit_codes::ENVIRONMENT_NOT_FOUND,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => exit_codes::CONFIG_PARSE,
            Self::WorkspaceNotFound { .. } => exit_codes::WORKSPACE_NOT_FOUND,
        }
    }
}

/// Pick the exit code for an error chain: the first [`BootstrapError`] wins,
/// anything else is [`exit_codes::INVALID`].
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BootstrapError>())
        .map(BootstrapError::exit_code)
        .unwrap_or(exit_codes::INVALID)
}
