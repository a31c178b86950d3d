//! Property-based invariants for Reciprocal Rank Fusion.

use std::collections::HashSet;

use proptest::prelude::*;

use recall_core::models::RankedHit;
use recall_retrieval::search::fuse;

fn hit(id: &str) -> RankedHit {
    RankedHit::new(id, format!("content of {id}"), 0.0)
}

/// A ranked list of unique document ids drawn from a small alphabet.
fn ranked_list() -> impl Strategy<Value = Vec<RankedHit>> {
    prop::collection::hash_set("doc-[a-h]", 0..6).prop_map(|ids| {
        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort();
        ids.iter().map(|id| hit(id)).collect()
    })
}

fn ranked_lists() -> impl Strategy<Value = Vec<Vec<RankedHit>>> {
    prop::collection::vec(ranked_list(), 0..4)
}

fn ids(hits: &[RankedHit]) -> Vec<String> {
    hits.iter().map(|h| h.document_id.clone()).collect()
}

proptest! {
    #[test]
    fn fusion_is_deterministic(lists in ranked_lists(), k in 1u32..200) {
        let a = fuse(&lists, k);
        let b = fuse(&lists, k);
        prop_assert_eq!(ids(&a), ids(&b));
        let scores_a: Vec<f64> = a.iter().map(|h| h.score).collect();
        let scores_b: Vec<f64> = b.iter().map(|h| h.score).collect();
        prop_assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn no_document_is_dropped_or_duplicated(lists in ranked_lists(), k in 1u32..200) {
        let fused = fuse(&lists, k);
        let expected: HashSet<String> = lists
            .iter()
            .flatten()
            .map(|h| h.document_id.clone())
            .collect();
        let got: HashSet<String> = fused.iter().map(|h| h.document_id.clone()).collect();
        prop_assert_eq!(got, expected);
        let unique: HashSet<String> = fused.iter().map(|h| h.document_id.clone()).collect();
        prop_assert_eq!(unique.len(), fused.len());
    }

    #[test]
    fn single_list_fuses_to_the_identity_permutation(list in ranked_list(), k in 1u32..200) {
        let fused = fuse(std::slice::from_ref(&list), k);
        prop_assert_eq!(ids(&fused), ids(&list));
        for window in fused.windows(2) {
            prop_assert!(window[0].score > window[1].score);
        }
    }

    #[test]
    fn scores_never_exceed_the_per_list_maximum(lists in ranked_lists(), k in 1u32..200) {
        // A document can contribute at most 1/(k+1) per list.
        let ceiling = lists.len() as f64 / f64::from(k + 1);
        let fused = fuse(&lists, k);
        for hit in &fused {
            prop_assert!(hit.score <= ceiling + 1e-12);
        }
    }

    #[test]
    fn output_ordering_is_monotonically_non_increasing(lists in ranked_lists(), k in 1u32..200) {
        let fused = fuse(&lists, k);
        for window in fused.windows(2) {
            prop_assert!(window[0].score >= window[1].score);
        }
    }
}
