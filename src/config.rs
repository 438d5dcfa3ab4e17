// Optional user configuration (never holds tasks)

use crate::models::Priority;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "tasklist";
const CONFIG_FILE: &str = "tasklist.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Priority the task form resets to
    pub default_priority: Priority,
    /// Colour output
    pub color: bool,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
    /// File this config was read from, `None` for defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_priority: Priority::Low,
            color: true,
            log_level: "warn".to_string(),
            source: None,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/tasklist/tasklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }
}
