//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines multiple ranked lists into a single fused ranking without
//! requiring score normalization across different retrieval methods.

use std::collections::HashMap;

use recall_core::models::RankedHit;

struct Accumulated {
    hit: RankedHit,
    score: f64,
    /// Position of the first sighting across the concatenated inputs;
    /// the tie-break key, so equal scores order deterministically.
    first_seen: usize,
}

/// Fuse multiple ranked result lists using Reciprocal Rank Fusion.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of high-ranking items from any single list.
///
/// Each hit at 1-based position `rank` contributes `1/(k + rank)` to its
/// document's running score. Content and metadata come from the first
/// list in which a document appears; later sightings only add score.
/// Hits with an empty `document_id` contribute nothing and are dropped.
pub fn fuse(ranked_lists: &[Vec<RankedHit>], k: u32) -> Vec<RankedHit> {
    let mut accumulated: HashMap<String, Accumulated> = HashMap::new();
    let mut next_seen = 0usize;

    for list in ranked_lists {
        for (position, hit) in list.iter().enumerate() {
            if hit.document_id.is_empty() {
                continue;
            }
            let contribution = 1.0 / (f64::from(k) + (position + 1) as f64);
            match accumulated.get_mut(&hit.document_id) {
                Some(entry) => entry.score += contribution,
                None => {
                    accumulated.insert(
                        hit.document_id.clone(),
                        Accumulated {
                            hit: hit.clone(),
                            score: contribution,
                            first_seen: next_seen,
                        },
                    );
                    next_seen += 1;
                }
            }
        }
    }

    let mut fused: Vec<Accumulated> = accumulated.into_values().collect();
    fused.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.first_seen.cmp(&b.first_seen))
    });

    fused
        .into_iter()
        .map(|entry| {
            let mut hit = entry.hit;
            hit.score = entry.score;
            hit
        })
        .collect()
}
