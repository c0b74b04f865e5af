pub mod ai_providers;
pub mod code_reviewer;
pub mod response_normalizer;
pub mod review_renderer;
