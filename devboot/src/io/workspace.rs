//! Resolve the working directory the session should end up in.

use std::path::{Path, PathBuf};

use crate::error::BootstrapError;

pub fn resolve_workspace(path: &Path) -> Result<PathBuf, BootstrapError> {
    if !path.is_dir() {
        return Err(BootstrapError::WorkspaceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}
