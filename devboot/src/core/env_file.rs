//! Parser for the constrained `KEY=VALUE` format of `config.env`.
//!
//! Grammar, per line:
//! - blank lines and lines starting with `#` (after trimming) are skipped
//! - an optional leading `export ` is ignored
//! - the line is split at the first `=`; the key is trimmed and must be a
//!   shell identifier, the value is trimmed and otherwise kept verbatim
//!
//! There is no quoting, escaping, or variable expansion.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Why a `config.env` line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line {line}: expected KEY=VALUE, found '{content}'")]
    MissingEquals { line: usize, content: String },
    #[error("line {line}: invalid key '{key}' (expected [A-Za-z_][A-Za-z0-9_]*)")]
    InvalidKey { line: usize, key: String },
}

impl LineError {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingEquals { line, .. } | Self::InvalidKey { line, .. } => *line,
        }
    }
}

/// Parsed `config.env` contents.
///
/// Keys are unique: a repeated key keeps the value of its last occurrence and
/// the position of its first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    pub fn parse(contents: &str) -> Result<Self, LineError> {
        let mut file = Self::default();
        for (idx, raw) in contents.split('\n').enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim_end_matches('\r').trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let body = trimmed
                .strip_prefix("export ")
                .map(str::trim_start)
                .unwrap_or(trimmed);
            let Some((key, value)) = body.split_once('=') else {
                return Err(LineError::MissingEquals {
                    line,
                    content: trimmed.to_string(),
                });
            };
            let key = key.trim();
            if !KEY_RE.is_match(key) {
                return Err(LineError::InvalidKey {
                    line,
                    key: key.to_string(),
                });
            }
            file.insert(key, value.trim());
        }
        Ok(file)
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
