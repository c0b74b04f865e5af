use pair_engineer::enums::ai_provider_error::AiProviderError;
use pair_engineer::enums::review_error_code::ReviewErrorCode;
use pair_engineer::enums::severity::Severity;
use pair_engineer::enums::test_kind::TestKind;
use pair_engineer::errors::EngineerError;
use pair_engineer::services::review_renderer::ReviewRenderer;
use serde_json::Value;
use crate::integration::common::{reviewer_for, StubProvider, FULL_REVIEW_JSON};

#[tokio::test]
async fn full_review_comes_back_structured() {
    let provider = StubProvider::replying(&format!("```json\n{FULL_REVIEW_JSON}\n```"));
    let reviewer = reviewer_for(&provider);

    let result = reviewer
        .review_code("python", "def add(item, items=[]):\n    items.append(item)", "helper")
        .await
        .unwrap();

    assert!(!result.has_error());
    assert_eq!(result.design_flaws.len(), 1);
    assert_eq!(result.design_flaws[0].severity, Severity::Major);
    assert_eq!(result.tests[0].kind, TestKind::Unit);
    assert_eq!(result.refactor.goals, vec!["Remove shared mutable default".to_string()]);
    assert_eq!(provider.call_count(), 1);

    let prompt = provider.last_user_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Language: python"));
    assert!(prompt.contains("```python\ndef add(item, items=[]):"));
}

#[tokio::test]
async fn rate_limit_result_serializes_error_block() {
    let provider = StubProvider::failing(AiProviderError::RateLimited("quota exceeded".to_string()));

    let result = reviewer_for(&provider).review_code("go", "package main", "").await.unwrap();
    let json: Value = serde_json::from_str(&ReviewRenderer::to_json(&result).unwrap()).unwrap();

    assert_eq!(json["_error"]["code"], "rate_limit");
    assert!(json["summary"].as_str().unwrap().contains("wait 1-2 minutes"));
    assert_eq!(json["design_flaws"], Value::Array(Vec::new()));
    assert_eq!(json["tests"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn server_error_is_displayable() {
    let provider = StubProvider::failing(AiProviderError::ApiError {
        status: 503,
        message: "The model is overloaded.".to_string(),
    });

    let result = reviewer_for(&provider).review_code("go", "package main", "").await.unwrap();

    assert_eq!(result.error_code(), Some(ReviewErrorCode::ApiError));
    assert_eq!(result.summary, "API error: The model is overloaded.");
}

#[tokio::test]
async fn malformed_output_renders_raw_text() {
    let provider = StubProvider::replying("Sure! Here are my thoughts on your code.");

    let result = reviewer_for(&provider).review_code("java", "class A {}", "").await.unwrap();
    let markdown = ReviewRenderer::to_markdown(&result, "java");

    assert_eq!(result.error_code(), Some(ReviewErrorCode::MalformedJson));
    assert!(markdown.contains("Model did not return valid JSON. Showing raw output."));
    assert!(markdown.contains("Sure! Here are my thoughts on your code."));
}

#[tokio::test]
async fn empty_model_text_is_malformed() {
    let provider = StubProvider::replying("");

    let result = reviewer_for(&provider).review_code("cpp", "int main() {}", "").await.unwrap();

    assert_eq!(result.error_code(), Some(ReviewErrorCode::MalformedJson));
    assert_eq!(result.raw_output(), Some(""));
}

#[tokio::test]
async fn serialization_failure_propagates() {
    let provider = StubProvider::failing(AiProviderError::SerializationError("bad body".to_string()));

    let error = reviewer_for(&provider).review_code("go", "package main", "").await.unwrap_err();

    assert!(matches!(error, EngineerError::ParseError { .. }));
}
