//! Search-stage building blocks.

pub mod rrf_fusion;

pub use rrf_fusion::fuse;
