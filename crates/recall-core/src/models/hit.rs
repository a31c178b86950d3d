//! The unit exchanged between retrieval, fusion, and the API boundary.

use serde::{Deserialize, Serialize};

use crate::models::tenant::TenantId;

/// A single ranked search hit.
///
/// Before fusion, `score` is signal-specific (cosine similarity for dense,
/// sparse dot product for sparse). After fusion it is the summed RRF
/// score. The two are never comparable across stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedHit {
    pub document_id: String,
    pub content: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl RankedHit {
    pub fn new(document_id: impl Into<String>, content: impl Into<String>, score: f64) -> Self {
        Self {
            document_id: document_id.into(),
            content: content.into(),
            score,
            metadata: serde_json::Value::Null,
        }
    }

    /// Attach metadata, builder-style.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A hit as returned by the vector store, tagged with the tenant the
/// store claims it belongs to.
///
/// The retrieval engine re-validates the tag against the requested
/// tenant and drops mismatches, so a store bug that returns extra rows
/// cannot leak across the isolation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub tenant_id: TenantId,
    pub hit: RankedHit,
}
