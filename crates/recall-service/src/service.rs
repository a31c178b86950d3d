//! RecallService — the dependency-injection seam and operation surface.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use recall_core::config::RecallConfig;
use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::{
    DeleteOutcome, DocumentInput, HealthReport, IngestReceipt, SearchRequest, SearchResponse,
    SummaryResponse, TenantId,
};
use recall_core::traits::{IEmbeddingProvider, ITextGenerator, IVectorStore};
use recall_retrieval::{RetrievalEngine, SparseVectorizer, Summarizer};

/// The service facade.
///
/// Holds the process-wide collaborators and the pipeline stages built on
/// them. One instance serves all tenants; per-request state never
/// outlives its call.
pub struct RecallService {
    store: Arc<dyn IVectorStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    vectorizer: SparseVectorizer,
    engine: RetrievalEngine,
    summarizer: Summarizer,
    config: RecallConfig,
}

impl RecallService {
    pub fn new(
        store: Arc<dyn IVectorStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        generator: Arc<dyn ITextGenerator>,
        config: RecallConfig,
    ) -> Self {
        let engine = RetrievalEngine::new(
            store.clone(),
            embedder.clone(),
            config.retrieval.clone(),
        );
        let summarizer = Summarizer::new(generator, config.augmentation.clone());
        let vectorizer = SparseVectorizer::new(config.retrieval.sparse_buckets);

        info!(
            embedding_dimension = config.embedding_dimension,
            retrieval_deadline_ms = config.retrieval.deadline_ms,
            augmentation_deadline_ms = config.augmentation.deadline_ms,
            "RecallService initialized"
        );

        Self {
            store,
            embedder,
            vectorizer,
            engine,
            summarizer,
            config,
        }
    }

    /// Ingest one document: embed, sparse-vectorize, and write both
    /// representations atomically as a single point.
    pub async fn ingest(&self, document: DocumentInput) -> RecallResult<IngestReceipt> {
        let started = Instant::now();
        document.validate()?;

        let DocumentInput {
            tenant_id,
            document_id,
            content,
            metadata,
        } = document;

        let dense = self.embedder.embed(&content)?;
        if dense.len() != self.config.embedding_dimension {
            return Err(RecallError::EmbeddingFailed {
                reason: format!(
                    "dimension mismatch: expected {}, got {}",
                    self.config.embedding_dimension,
                    dense.len()
                ),
            });
        }
        let sparse = self.vectorizer.vectorize(&content);
        let content_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

        self.store
            .upsert(&tenant_id, &document_id, &content, metadata, dense, sparse)
            .await?;

        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        info!(
            tenant = %tenant_id,
            document = %document_id,
            latency_ms = latency_ms as u64,
            "document ingested"
        );

        Ok(IngestReceipt {
            tenant_id,
            document_id,
            content_hash,
            latency_ms,
        })
    }

    /// Hybrid search under the retrieval deadline.
    pub async fn search(&self, request: &SearchRequest) -> RecallResult<SearchResponse> {
        request.validate()?;
        let top_k = request.effective_top_k(self.config.retrieval.default_top_k)?;

        let outcome = self
            .engine
            .retrieve(&request.tenant_id, &request.query, top_k)
            .await?;

        Ok(SearchResponse {
            results: outcome.hits,
            degraded: outcome.degraded,
            latency_ms: outcome.elapsed.as_secs_f64() * 1000.0,
        })
    }

    /// Hybrid search followed by a bounded summarization pass.
    ///
    /// The summary is strictly additive: generation failure or expiry
    /// replaces the text, never the result set, and never the request's
    /// success.
    pub async fn search_with_summary(
        &self,
        request: &SearchRequest,
    ) -> RecallResult<SummaryResponse> {
        let started = Instant::now();

        let search = self.search(request).await?;
        let summary = self
            .summarizer
            .summarize(&request.query, &search.results)
            .await;

        Ok(SummaryResponse {
            results: search.results,
            summary: summary.text,
            degraded: search.degraded,
            latency_ms: started.elapsed().as_secs_f64() * 1000.0,
            search_latency_ms: search.latency_ms,
            generation_latency_ms: summary.elapsed.as_secs_f64() * 1000.0,
        })
    }

    /// Remove every document belonging to the tenant. Repeat-safe: a
    /// second call returns 0, never an error.
    pub async fn delete_tenant(&self, tenant_id: &TenantId) -> RecallResult<DeleteOutcome> {
        let deleted = self.store.delete_tenant(tenant_id).await?;
        info!(tenant = %tenant_id, deleted, "tenant documents deleted");
        Ok(DeleteOutcome {
            tenant_id: tenant_id.clone(),
            deleted,
        })
    }

    /// Collaborator availability snapshot.
    pub async fn health(&self) -> HealthReport {
        let store_available = self.store.is_available().await;
        let embedder_available = self.embedder.is_available();
        HealthReport {
            status: HealthReport::derive_status(store_available, embedder_available),
            store_available,
            embedder_available,
            embedding_provider: self.embedder.name().to_string(),
            embedding_dimension: self.config.embedding_dimension,
        }
    }
}
