use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_TEMPERATURE, GEMINI_PROVIDER};
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::EngineerResult;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_output_tokens: Option<u32>,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            client: Client::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: None,
        }
    }

    pub fn from_config(config: &AiConfig) -> EngineerResult<Self> {
        let api_key = config.api_key()?;

        Ok(Self::new(api_key)
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_temperature(config.temperature)
            .with_max_output_tokens(config.max_output_tokens))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub const fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn get_request(&self, system_prompt: String, user_prompt: String) -> GeminiRequest {
        let system_instruction = (!system_prompt.is_empty()).then(|| GeminiContent {
            role: None,
            parts: vec![GeminiPart::text(system_prompt)],
        });

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart::text(user_prompt)],
            }],
            system_instruction,
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: self.max_output_tokens,
                candidate_count: Some(1),
            }),
        }
    }

    async fn make_request(&self, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.without_url().to_string()))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn chat(&self, system_prompt: String, user_prompt: String) -> Result<String, AiProviderError> {
        let request_body = self.get_request(system_prompt, user_prompt);
        let response = self.make_request(&request_body).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API error response ({}): {}", status.as_u16(), error_text);
            return Err(AiProviderError::from_status(status.as_u16(), &error_text));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.without_url().to_string()))?;

        let text = body.text();
        if text.is_empty() {
            let block_reason = body
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "none".to_string());
            log::warn!("⚠️ Gemini returned no text (block reason: {block_reason})");
        }

        Ok(text)
    }

    fn name(&self) -> &'static str {
        GEMINI_PROVIDER
    }
}
