//! The bootstrap sequence: activate the venv, load `config.env`, resolve the
//! workspace.
//!
//! Steps run in a fixed order and stop at the first failure, so a missing venv
//! is reported before `config.env` is even read. Nothing here mutates the real
//! process environment; the caller decides how to apply [`Bootstrap::env`].

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::core::activation::{PathStyle, VirtualEnv, activation_mutation};
use crate::core::env_file::EnvFile;
use crate::core::mutation::{EnvMap, EnvironmentMutation, MergedEnv};
use crate::error::BootstrapError;
use crate::io::env_file::read_env_file;
use crate::io::layout::BootstrapPaths;
use crate::io::venv::locate_venv;
use crate::io::workspace::resolve_workspace;

/// Progress notifications, one per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage<'a> {
    Activating(&'a Path),
    LoadingConfig(&'a Path),
    ChangingDirectory(&'a Path),
}

impl fmt::Display for Stage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activating(path) => {
                write!(f, "Activating virtual environment at {}...", path.display())
            }
            Self::LoadingConfig(path) => {
                write!(f, "Loading environment variables from {}...", path.display())
            }
            Self::ChangingDirectory(path) => {
                write!(f, "Changing to workspace directory {}...", path.display())
            }
        }
    }
}

/// Successful bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub paths: BootstrapPaths,
    pub venv: VirtualEnv,
    pub config: EnvFile,
    /// Config entries in file order, then activation changes.
    pub mutation: EnvironmentMutation,
    pub env: MergedEnv,
    pub workdir: PathBuf,
}

impl Bootstrap {
    /// Final variable mapping (removals excluded).
    pub fn env_map(&self) -> EnvMap {
        self.env.to_map()
    }
}

/// Run the three bootstrap steps against `base_dir`.
///
/// `inherited_path` is the caller's current `PATH`; activation prepends to it
/// unless `config.env` sets its own `PATH`.
#[instrument(skip_all, fields(base_dir = %base_dir.display()))]
pub fn bootstrap(
    base_dir: &Path,
    inherited_path: Option<&str>,
    style: PathStyle,
    mut progress: impl FnMut(&Stage<'_>),
) -> Result<Bootstrap, BootstrapError> {
    let base_dir = std::path::absolute(base_dir).unwrap_or_else(|_| base_dir.to_path_buf());
    let paths = BootstrapPaths::new(base_dir);

    progress(&Stage::Activating(&paths.venv_dir));
    let venv = locate_venv(&paths.venv_dir, style)?;
    debug!(prompt = %venv.prompt, "located virtual environment");

    progress(&Stage::LoadingConfig(&paths.config_path));
    let config = read_env_file(&paths.config_path)?;

    progress(&Stage::ChangingDirectory(&paths.workspace_dir));
    let workdir = resolve_workspace(&paths.workspace_dir)?;

    let mut mutation = EnvironmentMutation::new();
    for (key, value) in config.entries() {
        mutation.set(key.as_str(), value.as_str());
    }
    let previous_path = config.get("PATH").or(inherited_path);
    mutation.extend(activation_mutation(&venv, previous_path, style));
    let env = mutation.merge();

    info!(
        vars = env.vars.len(),
        removed = env.removed.len(),
        workdir = %workdir.display(),
        "bootstrap complete"
    );
    Ok(Bootstrap {
        paths,
        venv,
        config,
        mutation,
        env,
        workdir,
    })
}
