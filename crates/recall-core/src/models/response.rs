//! Response and receipt models returned by the service facade.

use serde::{Deserialize, Serialize};

use crate::models::hit::RankedHit;
use crate::models::tenant::TenantId;

/// Result of a hybrid search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Fused hits, strictly descending by fused score.
    pub results: Vec<RankedHit>,
    /// True when the sparse signal missed the deadline and the results
    /// are dense-only.
    pub degraded: bool,
    pub latency_ms: f64,
}

/// Result of a search with summarization.
///
/// Summarization is strictly additive: `results` is exactly what the
/// plain search would have returned, and a generation failure only
/// replaces `summary` with fallback text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub results: Vec<RankedHit>,
    pub summary: String,
    pub degraded: bool,
    pub latency_ms: f64,
    pub search_latency_ms: f64,
    pub generation_latency_ms: f64,
}

/// Receipt for a successful ingest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub tenant_id: TenantId,
    pub document_id: String,
    /// blake3 hex digest of the ingested content.
    pub content_hash: String,
    pub latency_ms: f64,
}

/// Outcome of a tenant-scoped bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub tenant_id: TenantId,
    /// Points removed; 0 when the tenant was already empty.
    pub deleted: usize,
}
