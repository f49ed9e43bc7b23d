//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Used when neither the CLI, the config file nor the platform data dir gives a path
pub const FALLBACK_DATA_FILE: &str = "data/usagi.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub upcoming: UpcomingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the task file; `~/` is expanded
    #[serde(default)]
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingConfig {
    #[serde(default = "default_upcoming_days")]
    pub default_days: u32,
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self {
            default_days: default_upcoming_days(),
        }
    }
}

fn default_upcoming_days() -> u32 {
    7
}

pub fn get_app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("usagi"))
}

fn config_path() -> Option<PathBuf> {
    get_app_dir().map(|d| d.join("config.toml"))
}

impl Config {
    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Task file location: explicit path, then config, then the platform data dir.
    pub fn data_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        if let Some(path) = explicit {
            return path;
        }
        if let Some(configured) = &self.storage.data_file {
            return expand_home(configured);
        }
        dirs::data_dir()
            .map(|d| d.join("usagi").join("tasks.txt"))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_FILE))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
