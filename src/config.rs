//! Configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The rate card is fixed and is not configurable here.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// How the binary prints a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("CAMP_QUOTE_OUTPUT".to_string())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output format for the quote
    pub output: OutputFormat,

    /// Print every intermediate amount instead of just the quote
    pub breakdown: bool,

    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(AppConfig {
            output: lookup("CAMP_QUOTE_OUTPUT")
                .unwrap_or_else(|| "text".to_string())
                .parse()?,

            breakdown: lookup("CAMP_QUOTE_BREAKDOWN")
                .unwrap_or_else(|| "false".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CAMP_QUOTE_BREAKDOWN".to_string()))?,

            log_filter: lookup("CAMP_QUOTE_LOG").unwrap_or_else(|| "camp_quote=info".to_string()),
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
