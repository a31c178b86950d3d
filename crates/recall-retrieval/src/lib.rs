//! # recall-retrieval
//!
//! The hybrid-retrieval pipeline: deterministic sparse vectorization,
//! Reciprocal Rank Fusion, bounded execution with fallback policies, the
//! retrieval coordinator, and the bounded summarization stage.

pub mod augment;
pub mod deadline;
pub mod engine;
pub mod search;
pub mod sparse;

pub use augment::{Summarizer, SummaryOutcome};
pub use deadline::{BoundedRun, DeadlineGuard, FallbackPolicy};
pub use engine::{RetrievalEngine, RetrievalOutcome};
pub use sparse::SparseVectorizer;
