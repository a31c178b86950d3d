use async_trait::async_trait;

use crate::errors::RecallResult;

/// Text generation provider for the summarization stage.
///
/// One bounded call per request; the caller imposes the wall-clock limit.
#[async_trait]
pub trait ITextGenerator: Send + Sync {
    /// Generate a completion for the given prompts.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> RecallResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
