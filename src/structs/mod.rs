pub mod ai;
pub mod cli;
pub mod config;
pub mod design_flaw;
pub mod refactor_plan;
pub mod review_error;
pub mod review_request;
pub mod review_result;
pub mod test_suggestion;
