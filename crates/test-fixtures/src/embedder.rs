//! Deterministic hashed bag-of-words embedder.

use std::sync::atomic::{AtomicBool, Ordering};

use recall_core::errors::RecallResult;
use recall_core::traits::IEmbeddingProvider;

/// Embeds text by hashing whitespace tokens into a fixed-dimension
/// count vector and L2-normalizing it.
///
/// Token overlap between two texts shows up as cosine similarity, so
/// dense search over these embeddings behaves plausibly in tests while
/// staying fully deterministic across machines.
pub struct HashEmbedder {
    dims: usize,
    available: AtomicBool,
}

impl HashEmbedder {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            available: AtomicBool::new(true),
        }
    }

    /// Flip availability, for health-reporting tests.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dims];
        for token in text.to_lowercase().split_whitespace() {
            let digest = blake3::hash(token.as_bytes());
            let bytes = digest.as_bytes();
            let index =
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize % self.dims;
            vector[index] += 1.0;
        }
        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in vector.iter_mut() {
                *v /= norm;
            }
        }
        vector
    }
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        Ok(self.embed_one(text))
    }

    fn embed_batch(&self, texts: &[String]) -> RecallResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "hash-embedder"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
