//! Bounded summarization of fused search results.
//!
//! Strictly additive: a slow or failing generator downgrades the summary
//! text, it never fails the request or touches the result set.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use recall_core::config::AugmentationConfig;
use recall_core::constants::{
    MAX_CONTEXT_HITS, SUMMARY_MAX_TOKENS, SUMMARY_NO_RESULTS, SUMMARY_SYSTEM_PROMPT,
    SUMMARY_TEMPERATURE, SUMMARY_TIMED_OUT,
};
use recall_core::models::RankedHit;
use recall_core::traits::ITextGenerator;

use crate::deadline::{DeadlineGuard, FallbackPolicy};

/// Summary text plus the wall-clock spent producing it.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    pub text: String,
    pub elapsed: Duration,
}

/// Wraps the single generation call in a deadline with text fallbacks.
pub struct Summarizer {
    generator: Arc<dyn ITextGenerator>,
    config: AugmentationConfig,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn ITextGenerator>, config: AugmentationConfig) -> Self {
        Self { generator, config }
    }

    /// Summarize `hits` for `query`. Infallible by contract: every
    /// failure mode maps to fallback text.
    pub async fn summarize(&self, query: &str, hits: &[RankedHit]) -> SummaryOutcome {
        let started = Instant::now();

        if hits.is_empty() {
            // Nothing to summarize; never touch the provider.
            return SummaryOutcome {
                text: SUMMARY_NO_RESULTS.to_string(),
                elapsed: started.elapsed(),
            };
        }

        let prompt = build_prompt(query, hits);
        debug!(
            provider = self.generator.name(),
            context_hits = hits.len().min(MAX_CONTEXT_HITS),
            "requesting summary"
        );

        let generation = {
            let generator = self.generator.clone();
            tokio::spawn(async move {
                match generator
                    .complete(
                        SUMMARY_SYSTEM_PROMPT,
                        &prompt,
                        SUMMARY_MAX_TOKENS,
                        SUMMARY_TEMPERATURE,
                    )
                    .await
                {
                    Ok(text) => text,
                    Err(e) => {
                        warn!(error = %e, "generation failed, substituting fallback text");
                        format!(
                            "Summary generation failed: {e}. \
                             Search results are still available below."
                        )
                    }
                }
            })
        };

        let guard = DeadlineGuard::new(Duration::from_millis(self.config.deadline_ms));
        let text = match guard
            .run_bounded(
                "summary generation",
                vec![generation],
                FallbackPolicy::Substitute(SUMMARY_TIMED_OUT.to_string()),
            )
            .await
        {
            Ok(run) => run
                .into_slots()
                .flatten()
                .next()
                .unwrap_or_else(|| SUMMARY_TIMED_OUT.to_string()),
            Err(e) => {
                warn!(error = %e, "bounded generation errored, substituting fallback text");
                SUMMARY_TIMED_OUT.to_string()
            }
        };

        SummaryOutcome {
            text,
            elapsed: started.elapsed(),
        }
    }
}

/// Bounded prompt: at most the top `MAX_CONTEXT_HITS` hits are forwarded
/// to the provider, never the full candidate set.
fn build_prompt(query: &str, hits: &[RankedHit]) -> String {
    let context = hits
        .iter()
        .take(MAX_CONTEXT_HITS)
        .enumerate()
        .map(|(i, hit)| format!("[{}] {}", i + 1, hit.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Based on the following search results, provide a concise summary \
         answering the query: \"{query}\"\n\nSearch Results:\n{context}\n\nSummary:"
    )
}
