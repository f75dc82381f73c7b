//! Parsing for a virtual environment's `pyvenv.cfg`.

/// Fields of `pyvenv.cfg` that activation cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyvenvCfg {
    pub home: Option<String>,
    pub version: Option<String>,
    pub prompt: Option<String>,
}

/// Parse `key = value` lines. Lines without `=` and unknown keys are ignored,
/// matching how the interpreter itself reads the file.
pub fn parse_pyvenv_cfg(contents: &str) -> PyvenvCfg {
    let mut cfg = PyvenvCfg::default();
    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = unquote(value.trim());
        match key.trim().to_ascii_lowercase().as_str() {
            "home" => cfg.home = Some(value),
            // `version_info` replaced `version` in newer interpreters.
            "version" | "version_info" => cfg.version = Some(value),
            "prompt" => cfg.prompt = Some(value).filter(|p| !p.is_empty()),
            _ => {}
        }
    }
    cfg
}

fn unquote(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}
