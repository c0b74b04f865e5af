use crate::structs::review_result::ReviewResult;

/// Outcome of turning model text into a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedResponse {
    /// The text was valid review JSON.
    Parsed(ReviewResult),
    /// The text could not be read as review JSON; `raw` is the fence-stripped
    /// text and `error` the parser message.
    RawWithError { raw: String, error: String },
}

impl NormalizedResponse {
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    pub fn into_review_result(self) -> ReviewResult {
        match self {
            Self::Parsed(result) => result,
            Self::RawWithError { raw, error } => ReviewResult::malformed(&raw, &error),
        }
    }
}
