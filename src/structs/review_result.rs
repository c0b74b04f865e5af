use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::config::constants::{MALFORMED_JSON_SUMMARY, RATE_LIMIT_SUMMARY};
use crate::enums::review_error_code::ReviewErrorCode;
use crate::helpers::serde_helper::{discard, lenient_items, lenient_object, lenient_string};
use crate::structs::design_flaw::DesignFlaw;
use crate::structs::refactor_plan::RefactorPlan;
use crate::structs::review_error::ReviewError;
use crate::structs::test_suggestion::TestSuggestion;

/// One structured code review, created fresh for every request.
///
/// Deserialization accepts any JSON object: missing, `null` or oddly shaped
/// sections are coerced, unknown keys are kept in `extra`. An `_error` key in
/// model output is dropped; the block is only set by the pipeline itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ReviewResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,

    #[serde(default, deserialize_with = "lenient_items")]
    pub design_flaws: Vec<DesignFlaw>,

    #[serde(default, deserialize_with = "lenient_items")]
    pub tests: Vec<TestSuggestion>,

    #[serde(default, deserialize_with = "lenient_object")]
    pub refactor: RefactorPlan,

    #[serde(
        rename = "_error",
        default,
        deserialize_with = "discard",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<ReviewError>,

    /// Top-level keys the model added beyond the schema, written back as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewResult {
    pub fn rate_limited() -> Self {
        Self {
            summary: RATE_LIMIT_SUMMARY.to_string(),
            error: Some(ReviewError {
                code: ReviewErrorCode::RateLimit,
                message: "rate_limit".to_string(),
                raw: None,
            }),
            ..Self::default()
        }
    }

    pub fn api_error(message: &str) -> Self {
        Self {
            summary: format!("API error: {message}"),
            error: Some(ReviewError {
                code: ReviewErrorCode::ApiError,
                message: message.to_string(),
                raw: None,
            }),
            ..Self::default()
        }
    }

    /// Fallback for model output that is not valid review JSON. The raw
    /// text is kept both as the refactor patch and in the error block so the
    /// user can still read what the model said.
    pub fn malformed(raw: &str, parse_error: &str) -> Self {
        Self {
            summary: MALFORMED_JSON_SUMMARY.to_string(),
            refactor: RefactorPlan {
                patch: raw.to_string(),
                ..RefactorPlan::default()
            },
            error: Some(ReviewError {
                code: ReviewErrorCode::MalformedJson,
                message: parse_error.to_string(),
                raw: Some(raw.to_string()),
            }),
            ..Self::default()
        }
    }

    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_code(&self) -> Option<ReviewErrorCode> {
        self.error.as_ref().map(|error| error.code)
    }

    pub fn raw_output(&self) -> Option<&str> {
        self.error.as_ref().and_then(|error| error.raw.as_deref())
    }
}
