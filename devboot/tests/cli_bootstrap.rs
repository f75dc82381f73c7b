//! CLI tests for the `devboot` binary.
//!
//! Spawns the binary against temporary base directories and verifies exit
//! codes and that stdout only carries statements on success.

use std::path::Path;
use std::process::{Command, Output};

use devboot::exit_codes;
use devboot::test_support::TestLayout;

fn devboot(base: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devboot"))
        .arg("--base-dir")
        .arg(base)
        .args(args)
        .env("DEVBOOT_SETTINGS", base.join("no-settings.toml"))
        .env_remove("DEVBOOT_BASE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("run devboot")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn complete_layout_prints_statements() {
    let layout = TestLayout::complete("A=1\n# comment\n\nB=2\n").expect("layout");
    let output = devboot(layout.root(), &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let out = stdout(&output);
    assert!(out.contains("export A=1\n"));
    assert!(out.contains("export B=2\n"));
    assert!(out.contains("export VIRTUAL_ENV="));
    assert!(out.contains("unset PYTHONHOME\n"));
    let last = out.lines().last().expect("cd line");
    assert!(last.starts_with("cd "));
    assert!(last.contains("workspace"));

    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Activating virtual environment"));
}

#[test]
fn quiet_suppresses_progress() {
    let layout = TestLayout::complete("A=1\n").expect("layout");
    let output = devboot(layout.root(), &["--quiet"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_venv_exits_with_environment_not_found() {
    let layout = TestLayout::complete("A=1\n").expect("layout");
    layout.remove("venv").expect("remove");
    let output = devboot(layout.root(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::ENVIRONMENT_NOT_FOUND));
    assert!(output.stdout.is_empty());
}

#[test]
fn malformed_config_exits_with_config_parse() {
    let layout = TestLayout::complete("A=1\nNOVALUE\n").expect("layout");
    let output = devboot(layout.root(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::CONFIG_PARSE));
    assert!(output.stdout.is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("line 2"));
}

#[test]
fn missing_workspace_exits_with_workspace_not_found() {
    let layout = TestLayout::complete("A=1\n").expect("layout");
    layout.remove("workspace").expect("remove");
    let output = devboot(layout.root(), &[]);
    assert_eq!(output.status.code(), Some(exit_codes::WORKSPACE_NOT_FOUND));
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_flag_exits_with_invalid() {
    let layout = TestLayout::complete("A=1\n").expect("layout");
    let output = devboot(layout.root(), &["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn json_output_is_a_single_document() {
    let layout = TestLayout::complete("PROJECT_ID=demo\n").expect("layout");
    let output = devboot(layout.root(), &["--shell", "json", "-q"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["env"]["PROJECT_ID"], "demo");
    assert!(
        value["workdir"]
            .as_str()
            .expect("workdir")
            .ends_with("workspace")
    );
}

#[cfg(unix)]
#[test]
fn posix_output_evaluates_in_sh() {
    let layout = TestLayout::complete("GREETING=it's here\n").expect("layout");
    let output = devboot(layout.root(), &["-q"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let script = format!(
        "{}\nprintf '%s|%s' \"$GREETING\" \"$(basename \"$(pwd)\")\"",
        stdout(&output)
    );
    let evaluated = Command::new("sh")
        .arg("-c")
        .arg(script)
        .output()
        .expect("run sh");
    assert!(evaluated.status.success());
    assert_eq!(stdout(&evaluated), "it's here|workspace");
}

#[cfg(unix)]
#[test]
fn trailing_command_runs_inside_environment() {
    let layout = TestLayout::complete("A=1\n").expect("layout");
    let output = devboot(
        layout.root(),
        &[
            "-q",
            "--",
            "sh",
            "-c",
            "test \"$A\" = 1 && test -n \"$VIRTUAL_ENV\" && exit 9",
        ],
    );
    assert_eq!(output.status.code(), Some(9));
}
