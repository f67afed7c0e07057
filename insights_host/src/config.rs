// src/config.rs
//! Host configuration
//!
//! Read from an optional TOML file, then overridden by `INSIGHTS_*`
//! environment variables.

use insights_core::config::runtime::parse_log_level;
use insights_core::config::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod env_vars {
    pub const LOG_LEVEL: &str = "INSIGHTS_LOG_LEVEL";
    pub const ENABLE_TELEMETRY: &str = "INSIGHTS_ENABLE_TELEMETRY";
    pub const STORAGE_PATH: &str = "INSIGHTS_STORAGE_PATH";
}

pub const DEFAULT_REPORT_DESCRIPTION: &str = "Automated checks";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for {variable}")]
    InvalidEnvValue { variable: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub log_level: LogLevel,

    /// Forward telemetry to the log; the persisted user setting still applies
    pub enable_telemetry: bool,

    /// JSON file backing persisted user configuration; in memory when unset
    pub storage_path: Option<PathBuf>,

    /// Description written into exported reports
    pub report_description: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            enable_telemetry: false,
            storage_path: None,
            report_description: DEFAULT_REPORT_DESCRIPTION.to_string(),
        }
    }
}

impl HostConfig {
    /// Defaults, or the given file, with environment overrides applied
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|name| env::var(name).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides looked up by variable name
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = parse_log_level(&value).ok_or(ConfigError::InvalidEnvValue {
                variable: env_vars::LOG_LEVEL,
                value,
            })?;
        }

        if let Some(value) = lookup(env_vars::ENABLE_TELEMETRY) {
            self.enable_telemetry = value.trim().parse().map_err(|_| ConfigError::InvalidEnvValue {
                variable: env_vars::ENABLE_TELEMETRY,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(env_vars::STORAGE_PATH) {
            self.storage_path = (!value.is_empty()).then(|| PathBuf::from(value));
        }

        Ok(self)
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.to_log_level().to_level_filter()
    }
}
