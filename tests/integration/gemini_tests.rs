use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use pair_engineer::enums::ai_provider_error::AiProviderError;
use pair_engineer::services::ai_providers::gemini::GeminiProvider;
use pair_engineer::traits::ai_provider::AiProvider;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

#[derive(Default)]
struct Captured {
    api_key: Option<String>,
    body: Option<Value>,
}

/// Local stand-in for the generateContent endpoint answering with a fixed
/// status and body.
fn fake_gemini(status: StatusCode, reply: Value) -> (SocketAddr, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    let route = warp::post()
        .and(warp::path!("v1beta" / "models" / String))
        .and(warp::header::optional::<String>("x-goog-api-key"))
        .and(warp::body::json())
        .map(move |_model: String, api_key: Option<String>, body: Value| {
            let mut captured = sink.lock().unwrap();
            captured.api_key = api_key;
            captured.body = Some(body);
            warp::reply::with_status(warp::reply::json(&reply), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, captured)
}

fn provider_for(addr: SocketAddr) -> GeminiProvider {
    GeminiProvider::new("test-key".to_string())
        .with_base_url(format!("http://{addr}/v1beta"))
        .with_model("gemini-2.0-flash-lite".to_string())
}

fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_key_header_and_prompt_pieces() {
    let (addr, captured) = fake_gemini(StatusCode::OK, text_reply("{\"summary\":\"ok\"}"));

    let text = provider_for(addr)
        .chat("system rules".to_string(), "Language: go".to_string())
        .await
        .unwrap();

    assert_eq!(text, "{\"summary\":\"ok\"}");
    let captured = captured.lock().unwrap();
    assert_eq!(captured.api_key.as_deref(), Some("test-key"));
    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "system rules");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Language: go");
    assert_eq!(body["contents"][0]["role"], "user");
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let (addr, _) = fake_gemini(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" } }),
    );

    let error = provider_for(addr).chat(String::new(), "hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::RateLimited(_)));
    assert!(!error.is_fatal());
}

#[tokio::test]
async fn bad_request_is_an_api_error_with_message() {
    let (addr, _) = fake_gemini(
        StatusCode::BAD_REQUEST,
        json!({ "error": { "code": 400, "message": "models/nope is not found" } }),
    );

    let error = provider_for(addr).chat(String::new(), "hi".to_string()).await.unwrap_err();

    assert_eq!(
        error,
        AiProviderError::ApiError {
            status: 400,
            message: "models/nope is not found".to_string()
        }
    );
}

#[tokio::test]
async fn forbidden_is_an_authentication_error() {
    let (addr, _) = fake_gemini(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "API key not valid" } }),
    );

    let error = provider_for(addr).chat(String::new(), "hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::AuthenticationError(_)));
    assert!(error.is_fatal());
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = provider_for(addr).chat(String::new(), "hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::NetworkError(_)));
}

#[tokio::test]
async fn blocked_prompt_yields_empty_text() {
    let (addr, _) = fake_gemini(StatusCode::OK, json!({ "promptFeedback": { "blockReason": "SAFETY" } }));

    let text = provider_for(addr).chat(String::new(), "hi".to_string()).await.unwrap();

    assert!(text.is_empty());
}
