//! Environment changes implied by activating a virtual environment.
//!
//! Mirrors what a venv `activate` script does to the invoking shell:
//! `VIRTUAL_ENV`, `VIRTUAL_ENV_PROMPT`, `PATH` with the executables directory
//! in front, and `PYTHONHOME` removed.

use std::path::{Path, PathBuf};

use super::mutation::EnvironmentMutation;

/// Platform conventions for a virtual environment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Unix,
    Windows,
}

impl PathStyle {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Directory under the venv root holding its executables.
    pub fn bin_dir_name(self) -> &'static str {
        match self {
            Self::Unix => "bin",
            Self::Windows => "Scripts",
        }
    }

    pub fn path_separator(self) -> char {
        match self {
            Self::Unix => ':',
            Self::Windows => ';',
        }
    }
}

/// A located virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub prompt: String,
}

impl VirtualEnv {
    /// Build from a root directory and an optional configured prompt.
    ///
    /// Without a prompt the directory name is used, as `venv` does.
    pub fn new(root: impl Into<PathBuf>, prompt: Option<String>, style: PathStyle) -> Self {
        let root = root.into();
        let bin_dir = root.join(style.bin_dir_name());
        let prompt = prompt.unwrap_or_else(|| dir_name(&root));
        Self {
            root,
            bin_dir,
            prompt,
        }
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Variables removed on activation.
pub const REMOVED_ON_ACTIVATE: &[&str] = &["PYTHONHOME"];

/// Compute the mutation an activation applies on top of `previous_path`.
pub fn activation_mutation(
    venv: &VirtualEnv,
    previous_path: Option<&str>,
    style: PathStyle,
) -> EnvironmentMutation {
    let mut mutation = EnvironmentMutation::new();
    mutation.set("VIRTUAL_ENV", venv.root.to_string_lossy());
    mutation.set("VIRTUAL_ENV_PROMPT", venv.prompt.as_str());
    mutation.set("PATH", prepend_path(&venv.bin_dir, previous_path, style));
    for key in REMOVED_ON_ACTIVATE {
        mutation.unset(*key);
    }
    mutation
}

fn prepend_path(bin_dir: &Path, previous: Option<&str>, style: PathStyle) -> String {
    let bin = bin_dir.to_string_lossy();
    match previous.filter(|p| !p.is_empty()) {
        Some(rest) => format!("{bin}{}{rest}", style.path_separator()),
        None => bin.into_owned(),
    }
}
