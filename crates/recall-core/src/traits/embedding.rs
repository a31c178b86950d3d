use crate::errors::RecallResult;

/// Embedding generation provider.
///
/// Embedding is pure computation against process-wide shared model
/// weights, so the contract is synchronous; the query embedding is
/// computed once before the retrieval fan-out.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>>;

    /// Embed a batch of texts; output order matches input order 1:1.
    fn embed_batch(&self, texts: &[String]) -> RecallResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
