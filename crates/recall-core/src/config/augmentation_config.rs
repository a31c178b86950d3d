//! Configuration for the summarization stage.

use serde::{Deserialize, Serialize};

/// Configuration for the bounded summarization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentationConfig {
    /// Wall-clock budget for the single generation call, in milliseconds.
    /// Default: 2000.
    pub deadline_ms: u64,
}

impl Default for AugmentationConfig {
    fn default() -> Self {
        Self { deadline_ms: 2_000 }
    }
}
