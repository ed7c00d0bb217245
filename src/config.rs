use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory that `requests.md` / `requests.json` are written to.
    pub export_dir: PathBuf,
    /// `tracing-subscriber` filter directive, e.g. `info` or `reqtrack=debug`.
    pub log_level: String,
    /// syntect theme used for payload/response highlighting.
    pub highlight_theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            log_level: String::from("info"),
            highlight_theme: String::from("Solarized (dark)"),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reqtrack").join("config.toml"))
}

/// Load the user configuration, falling back to defaults when there is no
/// config directory or no config file.
pub fn load() -> anyhow::Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}
