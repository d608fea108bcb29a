//! Configuration management for logbound

use crate::truncate::{
    Limits, DEFAULT_MAX_CHARS, DEFAULT_MAX_CHARS_ANY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or `tracing_subscriber` filter directive, e.g. "info" or "logbound=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_elements: usize,
    /// String cap for the sequence and mapping entry points
    pub max_chars: usize,
    /// String cap for values of unknown shape
    pub max_chars_any: usize,
    pub max_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_chars: DEFAULT_MAX_CHARS,
            max_chars_any: DEFAULT_MAX_CHARS_ANY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LimitsConfig {
    /// Limits for the sequence and mapping entry points
    pub fn structured(&self) -> Limits {
        Limits::new(self.max_elements, self.max_chars).with_max_depth(self.max_depth)
    }

    /// Limits for the generic entry point
    pub fn any(&self) -> Limits {
        Limits::new(self.max_elements, self.max_chars_any).with_max_depth(self.max_depth)
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Config::default()
        };
        Ok(config.apply_env())
    }

    /// Load configuration from an explicit file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", "logbound") {
            Some(proj_dirs) => proj_dirs.config_dir().join("config.toml"),
            None => PathBuf::from("config.toml"),
        }
    }

    /// Apply `LOG_LEVEL` from the process environment
    pub fn apply_env(self) -> Self {
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        self.with_level_override(level.as_deref())
    }

    /// Replace the log level unless `level` is missing or blank
    pub fn with_level_override(mut self, level: Option<&str>) -> Self {
        if let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) {
            self.logging.level = level.to_string();
        }
        self
    }
}
