//! In-memory vector store with latency and misbehavior injection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::{DenseVector, RankedHit, ScoredPoint, SparseVector, TenantId};
use recall_core::traits::IVectorStore;

struct StoredPoint {
    document_id: String,
    content: String,
    metadata: serde_json::Value,
    dense: DenseVector,
    sparse: SparseVector,
}

/// Tenant-partitioned in-memory store: cosine similarity for dense
/// search, dot product for sparse search.
///
/// Knobs:
/// - `set_dense_delay` / `set_sparse_delay` add latency to one signal;
/// - `set_sparse_failure` makes sparse search error;
/// - `leak_foreign_point` simulates a filter bug by appending a row from
///   another tenant to every search result;
/// - `set_available` flips the health probe.
#[derive(Default)]
pub struct MemoryVectorStore {
    tenants: DashMap<String, Vec<StoredPoint>>,
    dense_delay: Mutex<Option<Duration>>,
    sparse_delay: Mutex<Option<Duration>>,
    sparse_failure: Mutex<Option<String>>,
    leaked: Mutex<Option<ScoredPoint>>,
    unavailable: AtomicBool,
}

impl MemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dense_delay(&self, delay: Option<Duration>) {
        *self.dense_delay.lock().unwrap() = delay;
    }

    pub fn set_sparse_delay(&self, delay: Option<Duration>) {
        *self.sparse_delay.lock().unwrap() = delay;
    }

    pub fn set_sparse_failure(&self, reason: Option<String>) {
        *self.sparse_failure.lock().unwrap() = reason;
    }

    /// Append this foreign-tenant row to every subsequent search result,
    /// simulating a store-side filter bug.
    pub fn leak_foreign_point(&self, point: ScoredPoint) {
        *self.leaked.lock().unwrap() = Some(point);
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Points currently stored for a tenant.
    pub fn point_count(&self, tenant_id: &TenantId) -> usize {
        self.tenants
            .get(tenant_id.as_str())
            .map(|points| points.len())
            .unwrap_or(0)
    }

    fn check_available(&self) -> RecallResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RecallError::UpstreamUnavailable {
                service: "vector-store".to_string(),
                reason: "store marked unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn collect_hits<F>(&self, tenant_id: &TenantId, limit: usize, score: F) -> Vec<ScoredPoint>
    where
        F: Fn(&StoredPoint) -> Option<f64>,
    {
        let mut scored: Vec<ScoredPoint> = self
            .tenants
            .get(tenant_id.as_str())
            .map(|points| {
                points
                    .iter()
                    .filter_map(|point| {
                        score(point).map(|s| ScoredPoint {
                            tenant_id: tenant_id.clone(),
                            hit: RankedHit::new(point.document_id.clone(), point.content.clone(), s)
                                .with_metadata(point.metadata.clone()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        scored.sort_by(|a, b| {
            b.hit
                .score
                .partial_cmp(&a.hit.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.hit.document_id.cmp(&b.hit.document_id))
        });
        scored.truncate(limit);

        if let Some(leaked) = self.leaked.lock().unwrap().clone() {
            scored.push(leaked);
        }
        scored
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    f64::from(dot / (norm_a * norm_b))
}

#[async_trait]
impl IVectorStore for MemoryVectorStore {
    async fn upsert(
        &self,
        tenant_id: &TenantId,
        document_id: &str,
        content: &str,
        metadata: serde_json::Value,
        dense: DenseVector,
        sparse: SparseVector,
    ) -> RecallResult<()> {
        self.check_available()?;
        let mut points = self.tenants.entry(tenant_id.as_str().to_string()).or_default();
        points.retain(|p| p.document_id != document_id);
        points.push(StoredPoint {
            document_id: document_id.to_string(),
            content: content.to_string(),
            metadata,
            dense,
            sparse,
        });
        Ok(())
    }

    async fn search_dense(
        &self,
        tenant_id: &TenantId,
        query: &DenseVector,
        limit: usize,
    ) -> RecallResult<Vec<ScoredPoint>> {
        self.check_available()?;
        let delay = *self.dense_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.collect_hits(tenant_id, limit, |point| Some(cosine(&point.dense, query))))
    }

    async fn search_sparse(
        &self,
        tenant_id: &TenantId,
        query: &SparseVector,
        limit: usize,
    ) -> RecallResult<Vec<ScoredPoint>> {
        self.check_available()?;
        let delay = *self.sparse_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = self.sparse_failure.lock().unwrap().clone() {
            return Err(RecallError::UpstreamUnavailable {
                service: "vector-store".to_string(),
                reason,
            });
        }
        Ok(self.collect_hits(tenant_id, limit, |point| {
            let score = f64::from(point.sparse.dot(query));
            (score > 0.0).then_some(score)
        }))
    }

    async fn delete_tenant(&self, tenant_id: &TenantId) -> RecallResult<usize> {
        self.check_available()?;
        let removed = self
            .tenants
            .remove(tenant_id.as_str())
            .map(|(_, points)| points.len())
            .unwrap_or(0);
        Ok(removed)
    }

    async fn is_available(&self) -> bool {
        !self.unavailable.load(Ordering::SeqCst)
    }
}
