//! Service health reporting.

use serde::{Deserialize, Serialize};

/// Aggregate health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Snapshot of collaborator availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub store_available: bool,
    pub embedder_available: bool,
    /// Name of the active embedding provider.
    pub embedding_provider: String,
    pub embedding_dimension: usize,
}

impl HealthReport {
    /// Healthy only when every collaborator is available.
    pub fn derive_status(store_available: bool, embedder_available: bool) -> HealthStatus {
        if store_available && embedder_available {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        }
    }
}
