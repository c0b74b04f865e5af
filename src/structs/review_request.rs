use serde::{Deserialize, Serialize};

/// Body of `POST /api/review`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub extra_context: String,
}

impl ReviewRequest {
    /// Returns the message to show the user when the request cannot be
    /// reviewed, `None` when it is fine to send.
    pub fn rejection_reason(&self, languages: &[String]) -> Option<String> {
        if self.code.trim().is_empty() {
            return Some("Paste code first.".to_string());
        }

        if !languages.iter().any(|language| language == &self.language) {
            return Some(format!(
                "Unsupported language '{}'. Choose one of: {}",
                self.language,
                languages.join(", ")
            ));
        }

        None
    }
}
