//! Node configuration loading.
//!
//! The outer application resolves the config file path (usually from its own
//! `--config` flag) and hands it to [`AppConfig::load`].

pub mod config;

pub use config::{
    AppConfig, ConfigError, DEFAULT_CONFIG_PATH, ExecutionConfig, NetworkConfig, StorageConfig,
};
