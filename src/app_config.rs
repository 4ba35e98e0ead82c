use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings. Credentials are deliberately
/// not part of the persisted configuration; they are supplied per job via the
/// CLI or environment and live only for the job's duration.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation API endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity levels
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate's level filter.
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            endpoint: default_endpoint(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save configuration to a JSON file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_endpoint() -> String {
    crate::providers::baidu::DEFAULT_ENDPOINT.to_string()
}
