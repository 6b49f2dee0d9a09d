use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("store")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_length")]
    pub token_length: usize,
    /// Idle sessions older than this are expired. `None` keeps them forever.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: Option<i64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_length: default_token_length(),
            max_age_days: default_max_age_days(),
        }
    }
}

impl SessionConfig {
    /// Idle expiry as a duration. Fails when the day count does not fit one.
    pub fn max_age(&self) -> Result<Option<Duration>, ConfigError> {
        match self.max_age_days {
            Some(days) => Duration::try_days(days)
                .map(Some)
                .ok_or_else(|| ConfigError::Invalid {
                    field: "session.max_age_days",
                    reason: format!("{days} days is out of range"),
                }),
            None => Ok(None),
        }
    }
}

fn default_token_length() -> usize {
    128
}

fn default_max_age_days() -> Option<i64> {
    Some(30)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.max_age()?;
        Ok(())
    }

    /// Default settings with the store rooted at `path`.
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store: StoreConfig { path: path.into() },
            ..Self::default()
        }
    }
}
