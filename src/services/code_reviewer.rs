use std::sync::Arc;
use std::time::Instant;
use crate::config::constants::GEMINI_PROVIDER;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{EngineerError, EngineerResult};
use crate::helpers::prompt_generator::build_user_prompt;
use crate::prompts::pair_engineer_prompt::PAIR_ENGINEER_SYSTEM_PROMPT;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::response_normalizer::ResponseNormalizer;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::review_result::ReviewResult;
use crate::traits::ai_provider::AiProvider;

/// Runs the prompt -> model -> normalize pipeline for one review.
#[derive(Clone)]
pub struct CodeReviewer {
    ai_provider: Arc<dyn AiProvider>,
}

impl CodeReviewer {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    pub fn from_config(config: &AiConfig) -> EngineerResult<Self> {
        match config.provider.as_str() {
            GEMINI_PROVIDER => {
                let provider = GeminiProvider::from_config(config)?;
                log::info!("🤖 Using {} model {}", provider.name(), provider.model());
                Ok(Self::new(Arc::new(provider)))
            }
            other => Err(EngineerError::config_error(
                &format!("Unsupported AI provider '{other}'"),
                Some("ai.provider"),
                Some(&format!("Set provider = \"{GEMINI_PROVIDER}\"")),
            )),
        }
    }

    /// Review `code` written in `language`.
    ///
    /// Rate limits and API errors come back as a `ReviewResult` carrying
    /// error metadata, as does model output that is not valid JSON.
    /// Transport, authentication and serialization failures are returned as
    /// `Err`.
    pub async fn review_code(&self, language: &str, code: &str, extra_context: &str) -> EngineerResult<ReviewResult> {
        let start = Instant::now();
        let user_prompt = build_user_prompt(language, code, extra_context);

        log::info!(
            "🔍 Reviewing {} bytes of {} with {}",
            code.len(),
            language,
            self.ai_provider.name()
        );

        let raw = match self
            .ai_provider
            .chat(PAIR_ENGINEER_SYSTEM_PROMPT.to_string(), user_prompt)
            .await
        {
            Ok(raw) => raw,
            Err(e) if e.is_fatal() => {
                log::error!("❌ Review request failed: {e}");
                return Err(e.into());
            }
            Err(e) => return Ok(Self::displayable_failure(e)),
        };

        let normalized = ResponseNormalizer::normalize(&raw);
        let parsed = normalized.is_parsed();
        let result = normalized.into_review_result();

        log::info!(
            "✅ Review finished in {:.2}s ({} flaws, {} tests{})",
            start.elapsed().as_secs_f64(),
            result.design_flaws.len(),
            result.tests.len(),
            if parsed { "" } else { ", raw output" }
        );

        Ok(result)
    }

    fn displayable_failure(error: AiProviderError) -> ReviewResult {
        match error {
            AiProviderError::RateLimited(message) => {
                log::warn!("🚦 Rate limit hit: {message}");
                ReviewResult::rate_limited()
            }
            AiProviderError::ApiError { status, message } => {
                log::warn!("⚠️ API error (HTTP {status}): {message}");
                ReviewResult::api_error(&message)
            }
            other => {
                log::warn!("⚠️ Model request failed: {other}");
                ReviewResult::api_error(&other.to_string())
            }
        }
    }
}
