//! Error handling for the application

use crate::config::ConfigError;

/// Application error type
///
/// Quoting itself cannot fail; these cover reading the form and configuration.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read quote form: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid quote form: {0}")]
    InvalidForm(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;
