//! Storage configuration.

use serde::Deserialize;

/// Storage settings. No fields are defined yet; any object contents are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[non_exhaustive]
pub struct StorageConfig {}
