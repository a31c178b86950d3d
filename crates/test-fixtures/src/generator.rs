//! Scripted text generation provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use recall_core::errors::{RecallError, RecallResult};
use recall_core::traits::ITextGenerator;

/// Returns a canned completion, optionally after a delay or as a
/// failure. Counts calls so tests can assert the provider was (not)
/// touched.
pub struct ScriptedGenerator {
    response: String,
    delay: Option<Duration>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            delay: None,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every call with this reason instead of answering.
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// How many times `complete` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ITextGenerator for ScriptedGenerator {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> RecallResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.failure {
            return Err(RecallError::UpstreamUnavailable {
                service: "text-generator".to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "scripted-generator"
    }
}
