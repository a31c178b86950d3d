//! Tracing subscriber initialization for embedding processes.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: env-filtered (`RUST_LOG`), compact
/// format, info by default.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
