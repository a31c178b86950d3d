//! Configuration for the Recall service.
//!
//! All values have sensible defaults; a partial TOML document overrides
//! only the keys it names.

mod augmentation_config;
mod retrieval_config;

pub use augmentation_config::AugmentationConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{RecallError, RecallResult};

/// Top-level configuration consumed by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Dimensionality the embedding provider must produce. Default: 384.
    pub embedding_dimension: usize,
    pub retrieval: RetrievalConfig,
    pub augmentation: AugmentationConfig,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            embedding_dimension: 384,
            retrieval: RetrievalConfig::default(),
            augmentation: AugmentationConfig::default(),
        }
    }
}

impl RecallConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(doc: &str) -> RecallResult<Self> {
        toml::from_str(doc).map_err(|e| RecallError::InvalidInput {
            reason: format!("malformed config: {e}"),
        })
    }
}
