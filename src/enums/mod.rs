pub mod ai_provider_error;
pub mod commands;
pub mod normalized_response;
pub mod output_format;
pub mod review_error_code;
pub mod severity;
pub mod test_kind;
