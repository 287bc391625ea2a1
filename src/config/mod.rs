//! Configuration loading for the node.
//!
//! Reads a JSON document with `executionConfig`, `networkConfig` and
//! `storageConfig` sections. Every key is optional: missing or `null` values
//! fall back to the defaults of their section, and unknown keys are ignored.
//! No value validation happens here beyond type checks.

mod decode;
mod error;
mod execution;
mod network;
mod storage;

pub use error::ConfigError;
pub use execution::ExecutionConfig;
pub use network::{DEFAULT_MAX_PEERS, DEFAULT_NAMESPACE, DEFAULT_PORT, NetworkConfig};
pub use storage::StorageConfig;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Path used when no `--config` flag is given.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Root configuration structure for the node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Execution settings (`executionConfig`).
    pub execution: ExecutionConfig,
    /// Peer-to-peer network settings (`networkConfig`).
    pub network: NetworkConfig,
    /// Storage settings (`storageConfig`).
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from the JSON file at `path`.
    ///
    /// On error the config that was built so far is still available through
    /// [`ConfigError::into_config`]: the default config when the file could
    /// not be opened, or the partially decoded one on a type error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening config file");

        let open_error = |source: io::Error| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        // Opening a directory succeeds on some platforms; reading it does not.
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::from(io::ErrorKind::IsADirectory)));
        }

        Self::from_reader(BufReader::new(file))
    }

    /// Decode configuration from the first JSON value in `reader`.
    ///
    /// Anything after the first value is left unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let (config, err) = decode::decode(reader).map_err(|source| ConfigError::Decode {
            source,
            partial: Box::default(),
        })?;

        if let Some(source) = err {
            debug!(error = %source, "config decoded with type errors");
            return Err(ConfigError::Decode {
                source,
                partial: Box::new(config),
            });
        }

        debug!(
            namespace = %config.network.namespace,
            topics = config.network.topics.len(),
            "config decoded"
        );
        Ok(config)
    }
}
