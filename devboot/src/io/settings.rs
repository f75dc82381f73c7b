//! devboot settings stored in `~/.config/devboot/settings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::emit::ShellKind;
use crate::io::layout::default_base_dir;

/// User settings (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// defaults below. Command-line flags and environment variables take
/// precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory holding `venv/`, `config.env` and `workspace/`.
    pub base_dir: Option<PathBuf>,

    /// Output dialect when printing statements.
    pub shell: ShellKind,

    /// Suppress progress messages.
    pub quiet: bool,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if let Some(base_dir) = &self.base_dir
            && base_dir.as_os_str().is_empty()
        {
            return Err(anyhow!("base_dir must not be empty"));
        }
        Ok(())
    }
}

/// `<home>/.config/devboot/settings.toml`.
pub fn default_settings_path(home: &Path) -> PathBuf {
    home.join(".config").join("devboot").join("settings.toml")
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `Settings::default()`.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(settings)
}

/// Values given on the command line (or through their environment variables).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub shell: Option<ShellKind>,
    pub quiet: bool,
}

/// Effective options after layering overrides over settings over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    pub base_dir: PathBuf,
    pub shell: ShellKind,
    pub quiet: bool,
}

pub fn resolve(overrides: Overrides, settings: Settings, home: Option<&Path>) -> Result<Effective> {
    let base_dir = match overrides.base_dir.or(settings.base_dir) {
        Some(dir) if dir.as_os_str().is_empty() => {
            return Err(anyhow!("base directory must not be empty"));
        }
        Some(dir) => dir,
        None => {
            let home = home.ok_or_else(|| {
                anyhow!("cannot determine home directory (set HOME or pass --base-dir)")
            })?;
            default_base_dir(home)
        }
    };
    Ok(Effective {
        base_dir,
        shell: overrides.shell.unwrap_or(settings.shell),
        quiet: overrides.quiet || settings.quiet,
    })
}
