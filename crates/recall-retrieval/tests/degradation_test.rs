//! Deadline-degradation behavior of the retrieval engine.
//!
//! Drives the engine against the in-memory store with injected latency
//! and failures: a late sparse signal degrades to dense-only, a late
//! dense signal fails the request, and completion order never changes
//! the fused ranking.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;

use recall_core::config::RetrievalConfig;
use recall_core::errors::RecallError;
use recall_core::models::{RankedHit, ScoredPoint, TenantId};
use recall_core::traits::{IEmbeddingProvider, IVectorStore};
use recall_retrieval::{RetrievalEngine, SparseVectorizer};
use test_fixtures::{HashEmbedder, MemoryVectorStore};

const DIMS: usize = 64;
const DEADLINE_MS: u64 = 200;

fn config() -> RetrievalConfig {
    RetrievalConfig {
        deadline_ms: DEADLINE_MS,
        ..RetrievalConfig::default()
    }
}

fn engine_with_fixtures() -> (Arc<MemoryVectorStore>, Arc<HashEmbedder>, RetrievalEngine) {
    let store = Arc::new(MemoryVectorStore::new());
    let embedder = Arc::new(HashEmbedder::new(DIMS));
    let engine = RetrievalEngine::new(store.clone(), embedder.clone(), config());
    (store, embedder, engine)
}

fn tenant(id: &str) -> TenantId {
    TenantId::new(id).unwrap()
}

async fn seed(
    store: &MemoryVectorStore,
    embedder: &HashEmbedder,
    tenant_id: &TenantId,
    document_id: &str,
    content: &str,
) {
    let vectorizer = SparseVectorizer::new(config().sparse_buckets);
    store
        .upsert(
            tenant_id,
            document_id,
            content,
            json!({ "origin": "fixture" }),
            embedder.embed(content).unwrap(),
            vectorizer.vectorize(content),
        )
        .await
        .unwrap();
}

async fn seed_corpus(store: &MemoryVectorStore, embedder: &HashEmbedder, tenant_id: &TenantId) {
    seed(store, embedder, tenant_id, "doc-timeouts", "deadline guard converts slowness into fallback").await;
    seed(store, embedder, tenant_id, "doc-fusion", "reciprocal rank fusion merges ranked lists").await;
    seed(store, embedder, tenant_id, "doc-sparse", "sparse vectors count hashed token frequency").await;
}

#[tokio::test]
async fn hybrid_search_fuses_both_signals() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;

    let outcome = engine
        .retrieve(&t, "rank fusion of ranked lists", 3)
        .await
        .unwrap();

    assert!(!outcome.degraded);
    assert!(!outcome.hits.is_empty());
    assert_eq!(outcome.hits[0].document_id, "doc-fusion");
    // Fused scores come out strictly descending.
    assert!(outcome.hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn late_sparse_signal_degrades_to_dense_only() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    store.set_sparse_delay(Some(Duration::from_millis(800)));

    let started = Instant::now();
    let outcome = engine
        .retrieve(&t, "deadline guard fallback", 3)
        .await
        .unwrap();

    assert!(outcome.degraded);
    assert!(!outcome.hits.is_empty());
    // Bounded by the deadline plus one scheduling quantum, never by the
    // injected sparse latency.
    assert!(started.elapsed() < Duration::from_millis(DEADLINE_MS + 300));
}

#[tokio::test]
async fn late_dense_signal_fails_the_request() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    store.set_dense_delay(Some(Duration::from_millis(800)));

    let err = engine
        .retrieve(&t, "deadline guard fallback", 3)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn sparse_failure_degrades_silently() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    store.set_sparse_failure(Some("index corrupted".to_string()));

    let outcome = engine
        .retrieve(&t, "rank fusion of ranked lists", 3)
        .await
        .unwrap();

    assert!(outcome.degraded);
    assert!(!outcome.hits.is_empty());
}

#[tokio::test]
async fn dense_store_error_is_upstream_unavailable() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    store.set_available(false);

    let err = engine.retrieve(&t, "anything", 3).await.unwrap_err();
    assert!(matches!(err, RecallError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn completion_order_does_not_change_the_ranking() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    let query = "sparse token frequency fusion";

    store.set_dense_delay(Some(Duration::from_millis(40)));
    store.set_sparse_delay(None);
    let dense_late = engine.retrieve(&t, query, 3).await.unwrap();

    store.set_dense_delay(None);
    store.set_sparse_delay(Some(Duration::from_millis(40)));
    let sparse_late = engine.retrieve(&t, query, 3).await.unwrap();

    let ids = |outcome: &recall_retrieval::RetrievalOutcome| {
        outcome
            .hits
            .iter()
            .map(|h| h.document_id.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&dense_late), ids(&sparse_late));
}

#[tokio::test]
async fn foreign_tenant_rows_from_a_buggy_store_are_dropped() {
    let (store, embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");
    seed_corpus(&store, &embedder, &t).await;
    store.leak_foreign_point(ScoredPoint {
        tenant_id: tenant("intruder"),
        hit: RankedHit::new("leaked-doc", "someone else's data", 0.99),
    });

    let outcome = engine
        .retrieve(&t, "rank fusion of ranked lists", 10)
        .await
        .unwrap();

    assert!(outcome
        .hits
        .iter()
        .all(|h| h.document_id != "leaked-doc"));
    assert!(!outcome.hits.is_empty());
}

#[tokio::test]
async fn tenants_never_see_each_other() {
    let (store, embedder, engine) = engine_with_fixtures();
    let (a, b) = (tenant("tenant-a"), tenant("tenant-b"));
    seed(&store, &embedder, &a, "doc-a", "alpha tenant private notes").await;
    seed(&store, &embedder, &b, "doc-b", "beta tenant private notes").await;

    // Even a query that is verbatim tenant-a content stays scoped to b.
    let outcome = engine
        .retrieve(&b, "alpha tenant private notes", 10)
        .await
        .unwrap();

    assert!(outcome.hits.iter().all(|h| h.document_id == "doc-b"));
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_io() {
    let (_store, _embedder, engine) = engine_with_fixtures();
    let t = tenant("acme");

    let blank = engine.retrieve(&t, "   ", 3).await.unwrap_err();
    assert!(matches!(blank, RecallError::InvalidInput { .. }));

    let zero = engine.retrieve(&t, "query", 0).await.unwrap_err();
    assert!(matches!(zero, RecallError::InvalidInput { .. }));

    let oversized = engine.retrieve(&t, "query", 101).await.unwrap_err();
    assert!(matches!(oversized, RecallError::InvalidInput { .. }));
}
