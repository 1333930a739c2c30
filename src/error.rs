//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no capacitor.config.json found in {0:?}")]
    NotFound(PathBuf),
    #[error("unsupported config format {0:?}")]
    Unsupported(PathBuf),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("failed to serialize config: {0}")]
    Serialize(serde_json::Error),
    #[error("failed to write config file: {0}")]
    WriteFile(std::io::Error),
}
