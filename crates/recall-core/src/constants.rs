/// Recall system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on `top_k` accepted at the request boundary.
pub const MAX_TOP_K: usize = 100;

/// Over-fetch factor applied to each retrieval signal before fusion.
pub const CANDIDATE_MULTIPLIER: usize = 2;

/// Maximum number of fused hits forwarded to the text generator.
pub const MAX_CONTEXT_HITS: usize = 5;

/// Token budget for generated summaries.
pub const SUMMARY_MAX_TOKENS: u32 = 200;

/// Sampling temperature for generated summaries.
pub const SUMMARY_TEMPERATURE: f32 = 0.7;

/// System prompt for the summarization call.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes search results concisely.";

/// Summary substituted when retrieval produced no hits.
pub const SUMMARY_NO_RESULTS: &str = "No search results found to summarize.";

/// Summary substituted when the generator misses its deadline.
pub const SUMMARY_TIMED_OUT: &str =
    "Summary generation timed out. Search results are still available below.";
