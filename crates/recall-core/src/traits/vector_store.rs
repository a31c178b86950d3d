use async_trait::async_trait;

use crate::errors::RecallResult;
use crate::models::{DenseVector, ScoredPoint, SparseVector, TenantId};

/// Vector store collaborator: tenant-scoped point storage with dense and
/// sparse nearest-neighbor search.
///
/// Every method takes the tenant as a mandatory filter. Implementations
/// must never return rows from another tenant; callers still re-validate
/// (defense in depth).
#[async_trait]
pub trait IVectorStore: Send + Sync {
    /// Store or replace one point: content, metadata, and both vector
    /// representations written atomically.
    #[allow(clippy::too_many_arguments)]
    async fn upsert(
        &self,
        tenant_id: &TenantId,
        document_id: &str,
        content: &str,
        metadata: serde_json::Value,
        dense: DenseVector,
        sparse: SparseVector,
    ) -> RecallResult<()>;

    /// Dense nearest-neighbor search, ordered by similarity descending.
    async fn search_dense(
        &self,
        tenant_id: &TenantId,
        query: &DenseVector,
        limit: usize,
    ) -> RecallResult<Vec<ScoredPoint>>;

    /// Sparse search, ordered by dot product descending.
    async fn search_sparse(
        &self,
        tenant_id: &TenantId,
        query: &SparseVector,
        limit: usize,
    ) -> RecallResult<Vec<ScoredPoint>>;

    /// Remove every point belonging to the tenant, returning the count.
    ///
    /// Must be repeat-safe: deleting an empty tenant returns 0, never an
    /// error.
    async fn delete_tenant(&self, tenant_id: &TenantId) -> RecallResult<usize>;

    /// Whether the store is currently reachable.
    async fn is_available(&self) -> bool;
}
