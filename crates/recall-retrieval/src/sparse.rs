//! Deterministic text → sparse weighted-index representation.
//!
//! No learned vocabulary and no external state: the output is purely a
//! function of the input bytes and the bucket count.

use std::collections::BTreeMap;

use recall_core::models::SparseVector;

/// Hashes whitespace tokens into a fixed bucket space, weighting each
/// bucket by term frequency.
///
/// Distinct tokens that hash to the same bucket sum their frequencies
/// into one weight: lossy aliasing is accepted in exchange for O(1)
/// indexing without a vocabulary table. Swapping this for a TF-IDF
/// scheme only requires reproducing the `vectorize` contract.
#[derive(Debug, Clone)]
pub struct SparseVectorizer {
    buckets: u32,
}

impl SparseVectorizer {
    pub fn new(buckets: u32) -> Self {
        assert!(buckets > 0, "bucket count must be positive");
        Self { buckets }
    }

    pub fn buckets(&self) -> u32 {
        self.buckets
    }

    /// Lower-case, split on whitespace, and count each token into its
    /// blake3-derived bucket. Empty text yields an empty vector.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        let mut weights: BTreeMap<u32, f32> = BTreeMap::new();
        for token in text.to_lowercase().split_whitespace() {
            *weights.entry(self.bucket_of(token)).or_insert(0.0) += 1.0;
        }
        SparseVector::from_weights(weights)
    }

    fn bucket_of(&self, token: &str) -> u32 {
        let digest = blake3::hash(token.as_bytes());
        let bytes = digest.as_bytes();
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) % self.buckets
    }
}
