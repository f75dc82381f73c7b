//! Read `config.env` from disk.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::core::env_file::EnvFile;
use crate::error::BootstrapError;

#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_env_file(path: &Path) -> Result<EnvFile, BootstrapError> {
    let contents = fs::read_to_string(path).map_err(|source| BootstrapError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file = EnvFile::parse(&contents).map_err(|source| BootstrapError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(vars = file.len(), "parsed config file");
    Ok(file)
}
