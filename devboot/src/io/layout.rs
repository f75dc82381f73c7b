//! Canonical paths under a bootstrap base directory.

use std::path::{Path, PathBuf};

/// Base directory name under the user's home when nothing else is configured.
pub const DEFAULT_BASE_DIR_NAME: &str = "mlb-agent-lab";

/// All paths the bootstrapper reads for a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPaths {
    pub base_dir: PathBuf,
    pub venv_dir: PathBuf,
    pub config_path: PathBuf,
    pub workspace_dir: PathBuf,
}

impl BootstrapPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            venv_dir: base_dir.join("venv"),
            config_path: base_dir.join("config.env"),
            workspace_dir: base_dir.join("workspace"),
            base_dir,
        }
    }
}

/// Resolve the user's home directory from an environment lookup.
///
/// `HOME` wins; `USERPROFILE` covers Windows.
pub fn home_dir(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// `<home>/mlb-agent-lab`.
pub fn default_base_dir(home: &Path) -> PathBuf {
    home.join(DEFAULT_BASE_DIR_NAME)
}
