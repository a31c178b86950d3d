//! Collaborator contracts.
//!
//! The retrieval core owns these traits; concrete engines, stores, and
//! generation providers live outside the workspace and are injected as
//! `Arc<dyn …>` at service construction.

mod embedding;
mod generation;
mod vector_store;

pub use embedding::IEmbeddingProvider;
pub use generation::ITextGenerator;
pub use vector_store::IVectorStore;
