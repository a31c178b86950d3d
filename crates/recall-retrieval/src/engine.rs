//! RetrievalEngine: orchestrates the hybrid retrieval pipeline.
//!
//! query → embed once → dense + sparse fan-out under one deadline →
//! RRF fusion → truncate. Dense is mandatory; sparse is best-effort and
//! degrades silently to dense-only on expiry or failure.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use recall_core::config::RetrievalConfig;
use recall_core::constants::{CANDIDATE_MULTIPLIER, MAX_TOP_K};
use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::{RankedHit, ScoredPoint, TenantId};
use recall_core::traits::{IEmbeddingProvider, IVectorStore};

use crate::deadline::{DeadlineGuard, FallbackPolicy};
use crate::search::rrf_fusion;
use crate::sparse::SparseVectorizer;

/// Result of one bounded hybrid retrieval.
#[derive(Debug, Clone)]
pub struct RetrievalOutcome {
    /// Fused hits, strictly descending by fused score, at most `top_k`.
    pub hits: Vec<RankedHit>,
    /// True when the sparse signal was dropped and the hits are
    /// dense-only.
    pub degraded: bool,
    pub elapsed: Duration,
}

/// The retrieval coordinator.
///
/// Collaborators are process-wide shared instances injected at
/// construction; per-request state stays on the stack.
pub struct RetrievalEngine {
    store: Arc<dyn IVectorStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    vectorizer: SparseVectorizer,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(
        store: Arc<dyn IVectorStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: RetrievalConfig,
    ) -> Self {
        let vectorizer = SparseVectorizer::new(config.sparse_buckets);
        Self {
            store,
            embedder,
            vectorizer,
            config,
        }
    }

    /// Run one hybrid retrieval for `tenant_id`.
    ///
    /// Fails with `TimeoutExceeded` only when the mandatory dense signal
    /// misses the deadline; a late or failing sparse search degrades the
    /// outcome instead.
    pub async fn retrieve(
        &self,
        tenant_id: &TenantId,
        query: &str,
        top_k: usize,
    ) -> RecallResult<RetrievalOutcome> {
        let started = Instant::now();

        if query.trim().is_empty() {
            return Err(RecallError::InvalidInput {
                reason: "query must be non-empty".to_string(),
            });
        }
        if top_k == 0 || top_k > MAX_TOP_K {
            return Err(RecallError::InvalidInput {
                reason: format!("top_k must be within 1..={MAX_TOP_K}, got {top_k}"),
            });
        }

        // Computed once, synchronously, before the fan-out.
        let query_embedding = self.embedder.embed(query)?;
        let sparse_query = self.vectorizer.vectorize(query);
        let fetch = top_k * CANDIDATE_MULTIPLIER;

        let dense_task = {
            let store = self.store.clone();
            let tenant = tenant_id.clone();
            tokio::spawn(async move { store.search_dense(&tenant, &query_embedding, fetch).await })
        };
        let sparse_task = {
            let store = self.store.clone();
            let tenant = tenant_id.clone();
            tokio::spawn(async move { store.search_sparse(&tenant, &sparse_query, fetch).await })
        };

        let guard = DeadlineGuard::new(Duration::from_millis(self.config.deadline_ms));
        let run = guard
            .run_bounded(
                "hybrid retrieval",
                vec![dense_task, sparse_task],
                FallbackPolicy::Partial,
            )
            .await?;
        let deadline_expired = run.degraded;
        let mut slots = run.into_slots();
        let dense_slot = slots.next().flatten();
        let sparse_slot = slots.next().flatten();

        let dense_hits = match dense_slot {
            Some(Ok(points)) => self.validate_tenant(tenant_id, points),
            Some(Err(e)) => return Err(e),
            None if deadline_expired => {
                return Err(RecallError::TimeoutExceeded {
                    operation: "dense search".to_string(),
                    budget_ms: self.config.deadline_ms,
                })
            }
            None => {
                return Err(RecallError::UpstreamUnavailable {
                    service: "vector-store".to_string(),
                    reason: "dense search task died".to_string(),
                })
            }
        };

        let (sparse_hits, degraded) = match sparse_slot {
            Some(Ok(points)) => (self.validate_tenant(tenant_id, points), false),
            Some(Err(e)) => {
                warn!(error = %e, "sparse search failed, continuing dense-only");
                (Vec::new(), true)
            }
            None => {
                warn!(
                    budget_ms = self.config.deadline_ms,
                    "sparse search missed the deadline, continuing dense-only"
                );
                (Vec::new(), true)
            }
        };

        debug!(
            dense = dense_hits.len(),
            sparse = sparse_hits.len(),
            "signals collected, fusing"
        );

        let fused = rrf_fusion::fuse(&[dense_hits, sparse_hits], self.config.rrf_k);
        let hits: Vec<RankedHit> = fused.into_iter().take(top_k).collect();
        let elapsed = started.elapsed();

        info!(
            tenant = %tenant_id,
            hits = hits.len(),
            degraded,
            elapsed_ms = elapsed.as_millis() as u64,
            "hybrid retrieval complete"
        );

        Ok(RetrievalOutcome {
            hits,
            degraded,
            elapsed,
        })
    }

    /// Drop any row the store attributed to a different tenant. The
    /// store already filters; this guards against a store bug leaking
    /// rows across the isolation boundary.
    fn validate_tenant(&self, tenant_id: &TenantId, points: Vec<ScoredPoint>) -> Vec<RankedHit> {
        let mut hits = Vec::with_capacity(points.len());
        for point in points {
            if point.tenant_id == *tenant_id {
                hits.push(point.hit);
            } else {
                warn!(
                    expected = %tenant_id,
                    got = %point.tenant_id,
                    document = %point.hit.document_id,
                    "store returned a foreign-tenant row, dropping"
                );
            }
        }
        hits
    }
}
