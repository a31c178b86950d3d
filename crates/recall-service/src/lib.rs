//! # recall-service
//!
//! The service facade over the retrieval pipeline: document ingest,
//! hybrid search, search with bounded summarization, tenant lifecycle,
//! and health reporting. Collaborators are injected as `Arc<dyn …>` at
//! construction; this crate also owns telemetry initialization.

pub mod service;
pub mod telemetry;

pub use service::RecallService;
