use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as _;
use serde_json::Value;
use crate::enums::normalized_response::NormalizedResponse;
use crate::structs::review_result::ReviewResult;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(?:json)?\s*\n(.*?)```\s*$").expect("fence pattern is valid")
});

pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Remove a markdown code fence (plain or tagged `json`) wrapping the
    /// whole text. Text that is not entirely wrapped is only trimmed.
    pub fn strip_markdown_fences(text: &str) -> &str {
        let trimmed = text.trim();

        FENCED_BLOCK
            .captures(trimmed)
            .and_then(|captures| captures.get(1))
            .map_or(trimmed, |body| body.as_str().trim())
    }

    pub fn normalize(raw: &str) -> NormalizedResponse {
        let cleaned = Self::strip_markdown_fences(raw);

        match Self::parse_review(cleaned) {
            Ok(result) => NormalizedResponse::Parsed(result),
            Err(e) => {
                log::warn!("⚠️ Model response is not valid review JSON: {e}");
                NormalizedResponse::RawWithError {
                    raw: cleaned.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    fn parse_review(text: &str) -> Result<ReviewResult, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object at the top level"));
        }
        serde_json::from_value(value)
    }
}
