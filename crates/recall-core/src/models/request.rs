//! Search request model.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_TOP_K;
use crate::errors::{RecallError, RecallResult};
use crate::models::tenant::TenantId;

/// A hybrid-search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub tenant_id: TenantId,
    pub query: String,
    /// Result count; falls back to the configured default when absent.
    #[serde(default)]
    pub top_k: Option<usize>,
}

impl SearchRequest {
    pub fn new(tenant_id: TenantId, query: impl Into<String>) -> Self {
        Self {
            tenant_id,
            query: query.into(),
            top_k: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Resolve `top_k` against the configured default and validate bounds.
    pub fn effective_top_k(&self, default_top_k: usize) -> RecallResult<usize> {
        let top_k = self.top_k.unwrap_or(default_top_k);
        if top_k == 0 || top_k > MAX_TOP_K {
            return Err(RecallError::InvalidInput {
                reason: format!("top_k must be within 1..={MAX_TOP_K}, got {top_k}"),
            });
        }
        Ok(top_k)
    }

    /// Reject blank queries before any I/O happens.
    pub fn validate(&self) -> RecallResult<()> {
        if self.query.trim().is_empty() {
            return Err(RecallError::InvalidInput {
                reason: "query must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        SearchRequest::new(TenantId::new("t").unwrap(), "how do deadlines work")
    }

    #[test]
    fn default_top_k_applies_when_unset() {
        assert_eq!(request().effective_top_k(5).unwrap(), 5);
        assert_eq!(request().with_top_k(9).effective_top_k(5).unwrap(), 9);
    }

    #[test]
    fn top_k_bounds_enforced() {
        assert!(request().with_top_k(0).effective_top_k(5).is_err());
        assert!(request().with_top_k(101).effective_top_k(5).is_err());
        assert!(request().with_top_k(100).effective_top_k(5).is_ok());
    }

    #[test]
    fn blank_query_rejected() {
        let mut req = request();
        req.query = "  ".to_string();
        assert!(req.validate().is_err());
    }
}
