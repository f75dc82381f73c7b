//! devboot: activate the venv, load `config.env`, enter the workspace.
//!
//! Prints shell statements on stdout (`eval "$(devboot)"`), or runs a command
//! inside the environment when one is given after `--`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use devboot::bootstrap::bootstrap;
use devboot::core::activation::PathStyle;
use devboot::core::emit::{ShellKind, render};
use devboot::error::exit_code_for;
use devboot::exit_codes;
use devboot::io::layout::home_dir;
use devboot::io::process::{exit_code_of, run_in_env};
use devboot::io::settings::{Effective, Overrides, default_settings_path, load_settings, resolve};
use devboot::logging;

#[derive(Parser)]
#[command(
    name = "devboot",
    version,
    about = "Activate the venv, load config.env, and enter the workspace"
)]
struct Cli {
    /// Directory holding `venv/`, `config.env` and `workspace/` [default: ~/mlb-agent-lab]
    #[arg(long, env = "DEVBOOT_BASE_DIR", value_name = "PATH")]
    base_dir: Option<PathBuf>,

    /// Dialect of the printed statements.
    #[arg(long, value_enum)]
    shell: Option<ShellKind>,

    /// Do not print progress messages.
    #[arg(short, long)]
    quiet: bool,

    /// Settings file [default: ~/.config/devboot/settings.toml]
    #[arg(long, env = "DEVBOOT_SETTINGS", value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Run COMMAND inside the environment instead of printing statements.
    #[arg(last = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("devboot: {:#}", err);
            std::process::exit(exit_code_for(&err));
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let home = home_dir(|key| std::env::var(key).ok());
    let effective = effective_options(&cli, home.as_deref())?;
    debug!(base_dir = %effective.base_dir.display(), shell = ?effective.shell, "resolved options");

    let quiet = effective.quiet;
    let inherited_path = std::env::var("PATH").ok();
    let boot = bootstrap(
        &effective.base_dir,
        inherited_path.as_deref(),
        PathStyle::current(),
        |stage| {
            if !quiet {
                eprintln!("{stage}");
            }
        },
    )?;

    if !cli.command.is_empty() {
        return match run_in_env(&cli.command, &boot.env, &boot.workdir) {
            Ok(status) => Ok(exit_code_of(status)),
            Err(err) => {
                eprintln!("devboot: {:#}", err);
                Ok(exit_codes::SPAWN_FAILED)
            }
        };
    }

    let script = render(effective.shell, &boot.env, &boot.workdir)?;
    print!("{script}");
    if !quiet {
        eprintln!("Environment ready in {}", boot.workdir.display());
    }
    Ok(exit_codes::OK)
}

fn effective_options(cli: &Cli, home: Option<&Path>) -> Result<Effective> {
    let settings_path = cli
        .settings
        .clone()
        .or_else(|| home.map(default_settings_path));
    let settings = match &settings_path {
        Some(path) => load_settings(path)?,
        None => Default::default(),
    };
    let overrides = Overrides {
        base_dir: cli.base_dir.clone(),
        shell: cli.shell,
        quiet: cli.quiet,
    };
    resolve(overrides, settings, home)
}
