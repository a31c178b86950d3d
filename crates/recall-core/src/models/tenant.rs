//! Tenant identity — the isolation boundary for every stored record.

use serde::{Deserialize, Serialize};

use crate::errors::{RecallError, RecallResult};

/// Opaque tenant identifier.
///
/// Every vector-store call carries exactly one `TenantId` as a mandatory
/// filter; no operation reads or deletes across tenants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Construct a tenant id, rejecting empty or all-whitespace input.
    pub fn new(id: impl Into<String>) -> RecallResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RecallError::InvalidInput {
                reason: "tenant_id must be non-empty".to_string(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(TenantId::new("").is_err());
        assert!(TenantId::new("   ").is_err());
        assert!(TenantId::new("acme").is_ok());
    }

    #[test]
    fn display_is_the_raw_id() {
        let tenant = TenantId::new("tenant-a").unwrap();
        assert_eq!(tenant.to_string(), "tenant-a");
        assert_eq!(tenant.as_str(), "tenant-a");
    }
}
