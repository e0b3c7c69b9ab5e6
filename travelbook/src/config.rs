//! Configuration management.
//!
//! Loads `<data_dir>/config.toml` with defaults for anything missing. The
//! data directory itself comes from the command line, the environment or
//! `~/.travelbook`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DATA_DIR: &str = ".travelbook";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend root, without a trailing slash.
    pub base_url: String,
    /// Where `config.toml` and the session storage live.
    #[serde(skip)]
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DATA_DIR),
        }
    }
}

impl Config {
    /// Resolve the effective configuration. Explicit overrides win over the file.
    pub fn load(data_dir: Option<PathBuf>, base_url: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => Self::default_data_dir()?,
        };

        let mut config = Self::load_from(&data_dir.join(CONFIG_FILE))?;
        config.data_dir = data_dir;
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        Ok(config)
    }

    pub fn default_data_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(DATA_DIR))
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}
