use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A hosted text-generation model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Send one system instruction and one user turn, return the model text.
    async fn chat(&self, system_prompt: String, user_prompt: String) -> Result<String, AiProviderError>;

    fn name(&self) -> &'static str;
}
