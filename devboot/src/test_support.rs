//! Test-only helpers for building bootstrap base directories on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A temporary base directory with `venv/`, `config.env` and `workspace/`.
pub struct TestLayout {
    dir: TempDir,
}

impl TestLayout {
    /// Create an empty base directory.
    pub fn empty() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    /// Create a base directory with every artifact present and `config`
    /// written to `config.env`.
    pub fn complete(config: &str) -> Result<Self> {
        let layout = Self::empty()?;
        layout.create_venv(None)?;
        layout.write_config(config)?;
        layout.create_dir("workspace")?;
        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create `venv/bin` (and `pyvenv.cfg` with `prompt` when given).
    pub fn create_venv(&self, prompt: Option<&str>) -> Result<()> {
        self.create_dir("venv/bin")?;
        self.create_dir("venv/Scripts")?;
        let mut cfg = String::from("home = /usr/bin\nversion = 3.12.3\n");
        if let Some(prompt) = prompt {
            cfg.push_str(&format!("prompt = '{prompt}'\n"));
        }
        self.write("venv/pyvenv.cfg", &cfg)
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        self.write("config.env", contents)
    }

    pub fn create_dir(&self, rel: &str) -> Result<()> {
        let path = self.root().join(rel);
        fs::create_dir_all(&path).with_context(|| format!("create directory {}", path.display()))
    }

    pub fn write(&self, rel: &str, contents: &str) -> Result<()> {
        let path = self.root().join(rel);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }

    /// Remove a file or directory below the base directory.
    pub fn remove(&self, rel: &str) -> Result<()> {
        let path = self.root().join(rel);
        if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        }
        .with_context(|| format!("remove {}", path.display()))
    }
}
