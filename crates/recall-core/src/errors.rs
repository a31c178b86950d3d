/// Service-wide error taxonomy.
///
/// Three recoverable-vs-fatal classes drive the propagation policy:
/// `TimeoutExceeded` triggers the caller's fallback policy,
/// `UpstreamUnavailable` fails retrieval but only degrades augmentation,
/// `InvalidInput` is rejected before any I/O.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecallError {
    #[error("{operation} timed out after {budget_ms}ms")]
    TimeoutExceeded { operation: String, budget_ms: u64 },

    #[error("{service} unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },
}

impl RecallError {
    /// Whether this error came from a deadline expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RecallError::TimeoutExceeded { .. })
    }
}

pub type RecallResult<T> = Result<T, RecallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_includes_budget() {
        let err = RecallError::TimeoutExceeded {
            operation: "retrieval".to_string(),
            budget_ms: 800,
        };
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "retrieval timed out after 800ms");
    }

    #[test]
    fn upstream_message_names_service() {
        let err = RecallError::UpstreamUnavailable {
            service: "vector-store".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(!err.is_timeout());
        assert!(err.to_string().starts_with("vector-store unavailable"));
    }
}
