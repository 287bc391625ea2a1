//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

use super::AppConfig;

/// Configuration loading error.
///
/// Every error still carries a usable config: the zero-valued one when the
/// file could not be opened, or whatever was decoded before a type error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to open config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode config: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        partial: Box<AppConfig>,
    },
}

impl ConfigError {
    /// Borrow the partially-populated config of a decode error.
    pub fn partial(&self) -> Option<&AppConfig> {
        match self {
            ConfigError::Open { .. } => None,
            ConfigError::Decode { partial, .. } => Some(partial),
        }
    }

    /// Consume the error and return the config that accompanies it.
    pub fn into_config(self) -> AppConfig {
        match self {
            ConfigError::Open { .. } => AppConfig::default(),
            ConfigError::Decode { partial, .. } => *partial,
        }
    }
}
