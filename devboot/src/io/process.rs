//! Run a command inside the bootstrapped environment.

use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

use crate::core::mutation::MergedEnv;

/// Spawn `argv` with `env` applied on top of the inherited environment and
/// `workdir` as its current directory, then wait for it.
#[instrument(skip_all, fields(program = argv.first().map(String::as_str).unwrap_or_default()))]
pub fn run_in_env(argv: &[String], env: &MergedEnv, workdir: &Path) -> Result<ExitStatus> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("no command given"))?;
    let mut cmd = Command::new(program);
    cmd.args(args).current_dir(workdir);
    for key in &env.removed {
        cmd.env_remove(key);
    }
    cmd.envs(env.vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    debug!("spawning child process");
    let status = cmd
        .status()
        .with_context(|| format!("spawn {program}"))?;
    debug!(exit_code = ?status.code(), "command finished");
    Ok(status)
}

/// Exit code to propagate for a finished child.
///
/// A child killed by a signal maps to `128 + signal`, as shells report it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
