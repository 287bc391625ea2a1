//! Network configuration.

/// Namespace used when `namespace` is absent.
pub const DEFAULT_NAMESPACE: &str = "";
/// Peer limit used when `maxPeers` is absent.
pub const DEFAULT_MAX_PEERS: i64 = 0;
/// Port used when `port` is absent.
pub const DEFAULT_PORT: i64 = 0;

/// Network settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Logical network namespace.
    pub namespace: String,
    /// Subscribed topics, in file order. Duplicates are kept.
    pub topics: Vec<String>,
    /// Upper bound on peer connections. Not checked for sign.
    pub max_peers: i64,
    /// Listen port. Not range-checked.
    pub port: i64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        PartialNetworkConfig::default().resolve()
    }
}

/// Network settings as read from the file, before defaults are applied.
#[derive(Debug, Default)]
pub(super) struct PartialNetworkConfig {
    pub namespace: Option<String>,
    pub topics: Option<Vec<String>>,
    pub max_peers: Option<i64>,
    pub port: Option<i64>,
}

impl PartialNetworkConfig {
    pub(super) fn resolve(self) -> NetworkConfig {
        NetworkConfig {
            namespace: self
                .namespace
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            topics: self.topics.unwrap_or_default(),
            max_peers: self.max_peers.unwrap_or(DEFAULT_MAX_PEERS),
            port: self.port.unwrap_or(DEFAULT_PORT),
        }
    }
}
