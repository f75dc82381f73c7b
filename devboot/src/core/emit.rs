//! Render a bootstrap result as statements for the invoking shell.
//!
//! A child process cannot change its parent's environment, so the CLI prints
//! statements and the shell evaluates them (`eval "$(devboot)"`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::mutation::{EnvMap, MergedEnv};

/// Output dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    /// `sh`, `bash`, `zsh` and friends.
    #[default]
    Posix,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    /// A single JSON document for tooling.
    Json,
}

#[derive(Serialize)]
struct JsonScript<'a> {
    env: EnvMap,
    unset: &'a [String],
    workdir: String,
}

/// Render assignments, then removals, then the directory change.
pub fn render(kind: ShellKind, env: &MergedEnv, workdir: &Path) -> serde_json::Result<String> {
    let workdir = workdir.to_string_lossy();
    if kind == ShellKind::Json {
        let doc = JsonScript {
            env: env.to_map(),
            unset: &env.removed,
            workdir: workdir.into_owned(),
        };
        let mut buf = serde_json::to_string_pretty(&doc)?;
        buf.push('\n');
        return Ok(buf);
    }

    let mut lines = Vec::with_capacity(env.vars.len() + env.removed.len() + 1);
    for (key, value) in &env.vars {
        lines.push(match kind {
            ShellKind::Fish => format!("set -gx {key} {}", fish_quote(value)),
            ShellKind::PowerShell => format!("$env:{key} = {}", powershell_quote(value)),
            _ => format!("export {key}={}", posix_quote(value)),
        });
    }
    for key in &env.removed {
        lines.push(match kind {
            ShellKind::Fish => format!("set -e {key}"),
            ShellKind::PowerShell => {
                format!("Remove-Item Env:{key} -ErrorAction SilentlyContinue")
            }
            _ => format!("unset {key}"),
        });
    }
    lines.push(match kind {
        ShellKind::Fish => format!("cd {}", fish_quote(&workdir)),
        ShellKind::PowerShell => {
            format!("Set-Location -LiteralPath {}", powershell_quote(&workdir))
        }
        _ => format!("cd {}", posix_quote(&workdir)),
    });

    let mut buf = lines.join("\n");
    buf.push('\n');
    Ok(buf)
}

fn is_plain(input: &str) -> bool {
    !input.is_empty()
        && input
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':'))
}

fn posix_quote(input: &str) -> String {
    if is_plain(input) {
        return input.to_string();
    }
    let mut escaped = String::from("'");
    for ch in input.chars() {
        if ch == '\'' {
            escaped.push_str("'\"'\"'");
        } else {
            escaped.push(ch);
        }
    }
    escaped.push('\'');
    escaped
}

fn fish_quote(input: &str) -> String {
    if is_plain(input) {
        return input.to_string();
    }
    let mut escaped = String::from("'");
    for ch in input.chars() {
        if matches!(ch, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('\'');
    escaped
}

fn powershell_quote(input: &str) -> String {
    format!("'{}'", input.replace('\'', "''"))
}
