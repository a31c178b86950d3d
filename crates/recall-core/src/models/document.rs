//! Ingestion input model.

use serde::{Deserialize, Serialize};

use crate::errors::{RecallError, RecallResult};
use crate::models::tenant::TenantId;

/// A document submitted for ingestion.
///
/// `metadata` is open-schema: any JSON value survives the round trip to
/// the store and back out through search hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInput {
    pub tenant_id: TenantId,
    /// Unique within the tenant; re-ingesting replaces the stored point.
    pub document_id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DocumentInput {
    /// Reject malformed documents before any I/O happens.
    pub fn validate(&self) -> RecallResult<()> {
        if self.document_id.trim().is_empty() {
            return Err(RecallError::InvalidInput {
                reason: "document_id must be non-empty".to_string(),
            });
        }
        if self.content.trim().is_empty() {
            return Err(RecallError::InvalidInput {
                reason: "content must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}
