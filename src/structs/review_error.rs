use serde::{Deserialize, Serialize};
use crate::enums::review_error_code::ReviewErrorCode;

/// Error metadata attached to a review result that could not be produced
/// from a well-formed model response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReviewError {
    pub code: ReviewErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}
