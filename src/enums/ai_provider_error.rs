use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiProviderError {
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AiProviderError {
    /// Map a non-success HTTP status and its body to a provider error.
    ///
    /// Google-style bodies (`{"error": {"message": ...}}`) contribute their
    /// message; anything else is passed through as text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = Self::extract_error_message(body);

        match status {
            429 => Self::RateLimited(message),
            401 | 403 => Self::AuthenticationError(message),
            _ => Self::ApiError { status, message },
        }
    }

    /// Whether the pipeline must surface this error to its caller instead of
    /// folding it into a displayable result.
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::ApiError { .. } => false,
            Self::AuthenticationError(_) | Self::NetworkError(_) | Self::SerializationError(_) => true,
        }
    }

    fn extract_error_message(body: &str) -> String {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return "Unknown error".to_string();
        }

        serde_json::from_str::<Value>(trimmed)
            .ok()
            .and_then(|json| {
                json.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| trimmed.to_string())
    }
}
