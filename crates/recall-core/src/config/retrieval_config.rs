//! Configuration for the hybrid retrieval stage.

use serde::{Deserialize, Serialize};

/// Configuration for hybrid search and rank fusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Wall-clock budget for the dense + sparse fan-out, in milliseconds.
    /// Default: 800.
    pub deadline_ms: u64,
    /// Smoothing constant for Reciprocal Rank Fusion. Default: 60.
    pub rrf_k: u32,
    /// Bucket count for the hashed sparse representation. Default: 10_000.
    pub sparse_buckets: u32,
    /// Result count when a request does not specify one. Default: 5.
    pub default_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            deadline_ms: 800,
            rrf_k: 60,
            sparse_buckets: 10_000,
            default_top_k: 5,
        }
    }
}
