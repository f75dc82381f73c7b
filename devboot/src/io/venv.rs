//! Locate the virtual environment and read its activation metadata.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::core::activation::{PathStyle, VirtualEnv};
use crate::core::pyvenv::parse_pyvenv_cfg;
use crate::error::BootstrapError;

/// Locate the virtual environment rooted at `root`.
///
/// The directory must exist. `pyvenv.cfg` is optional; an unreadable one is
/// logged and ignored.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn locate_venv(root: &Path, style: PathStyle) -> Result<VirtualEnv, BootstrapError> {
    if !root.is_dir() {
        return Err(BootstrapError::EnvironmentNotFound {
            path: root.to_path_buf(),
        });
    }

    let cfg_path = root.join("pyvenv.cfg");
    let prompt = match fs::read_to_string(&cfg_path) {
        Ok(contents) => {
            let cfg = parse_pyvenv_cfg(&contents);
            debug!(version = ?cfg.version, home = ?cfg.home, "read pyvenv.cfg");
            cfg.prompt
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!(path = %cfg_path.display(), err = %err, "ignoring unreadable pyvenv.cfg");
            None
        }
    };

    let venv = VirtualEnv::new(root, prompt, style);
    if !venv.bin_dir.is_dir() {
        warn!(bin_dir = %venv.bin_dir.display(), "virtual environment has no executables directory");
    }
    Ok(venv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_is_environment_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = locate_venv(&temp.path().join("venv"), PathStyle::Unix).unwrap_err();
        assert!(matches!(err, BootstrapError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn regular_file_is_environment_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("venv");
        fs::write(&path, "").expect("write");
        let err = locate_venv(&path, PathStyle::Unix).unwrap_err();
        assert!(matches!(err, BootstrapError::EnvironmentNotFound { .. }));
    }

    #[test]
    fn prompt_comes_from_pyvenv_cfg() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("venv");
        fs::create_dir_all(root.join("bin")).expect("mkdir");
        fs::write(root.join("pyvenv.cfg"), "home = /usr/bin\nprompt = 'lab'\n").expect("write");

        let venv = locate_venv(&root, PathStyle::Unix).expect("locate");
        assert_eq!(venv.prompt, "lab");
        assert_eq!(venv.bin_dir, root.join("bin"));
    }

    #[test]
    fn missing_pyvenv_cfg_uses_dir_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("venv");
        fs::create_dir_all(&root).expect("mkdir");

        let venv = locate_venv(&root, PathStyle::Unix).expect("locate");
        assert_eq!(venv.prompt, "venv");
    }
}
