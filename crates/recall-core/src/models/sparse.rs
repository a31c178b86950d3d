//! Sparse lexical representation: bucket index → positive term weight.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A sparse weighted-index vector.
///
/// `indices` is strictly ascending with no duplicates, and `values[i]` is
/// the weight at `indices[i]`. Two vectorizer runs on identical text
/// produce bit-identical `SparseVector`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

impl SparseVector {
    /// Build from a bucket → weight map; entries come out index-sorted.
    pub fn from_weights(weights: BTreeMap<u32, f32>) -> Self {
        let mut indices = Vec::with_capacity(weights.len());
        let mut values = Vec::with_capacity(weights.len());
        for (index, weight) in weights {
            indices.push(index);
            values.push(weight);
        }
        Self { indices, values }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dot product over the shared indices of two sparse vectors.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse(entries: &[(u32, f32)]) -> SparseVector {
        SparseVector::from_weights(entries.iter().copied().collect())
    }

    #[test]
    fn from_weights_sorts_by_index() {
        let v = sparse(&[(42, 2.0), (3, 1.0), (900, 5.0)]);
        assert_eq!(v.indices, vec![3, 42, 900]);
        assert_eq!(v.values, vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn dot_over_shared_indices_only() {
        let a = sparse(&[(1, 2.0), (5, 3.0), (9, 1.0)]);
        let b = sparse(&[(5, 4.0), (9, 2.0), (20, 7.0)]);
        assert_eq!(a.dot(&b), 3.0 * 4.0 + 1.0 * 2.0);
    }

    #[test]
    fn dot_with_disjoint_vectors_is_zero() {
        let a = sparse(&[(1, 2.0)]);
        let b = sparse(&[(2, 2.0)]);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn empty_vector() {
        let v = SparseVector::default();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
    }
}
