use std::fmt;
use serde::{Deserialize, Serialize};

/// Why a review result carries no model-provided content.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ReviewErrorCode {
    #[serde(rename = "rate_limit")]
    RateLimit,
    #[serde(rename = "api_error")]
    ApiError,
    #[serde(rename = "malformed_json")]
    MalformedJson,
}

impl ReviewErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RateLimit => "rate_limit",
            Self::ApiError => "api_error",
            Self::MalformedJson => "malformed_json",
        }
    }
}

impl fmt::Display for ReviewErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
