//! Configuration file parsing
//!
//! Reads changelog-complete.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub completion: CompletionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Element names never offered as completions, regardless of context
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        let format = &self.output.format;
        if !matches!(format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "invalid output format '{}'. Valid values: text, json",
                format
            )));
        }
        for name in &self.completion.exclude {
            if !crate::rules::is_known_element(name) {
                return Err(ConfigError::Validation(format!(
                    "unknown element '{}' in [completion] exclude",
                    name
                )));
            }
        }
        Ok(())
    }

    /// True if `element` is excluded from completion by configuration.
    pub fn is_excluded(&self, element: &str) -> bool {
        self.completion.exclude.iter().any(|e| e == element)
    }
}
