use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use pair_engineer::enums::ai_provider_error::AiProviderError;
use pair_engineer::services::code_reviewer::CodeReviewer;
use pair_engineer::traits::ai_provider::AiProvider;

/// Provider returning a canned response and recording the prompts it got.
pub struct StubProvider {
    response: Result<String, AiProviderError>,
    pub calls: AtomicUsize,
    pub last_user_prompt: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with(Ok(text.to_string()))
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Self::with(Err(error))
    }

    fn with(response: Result<String, AiProviderError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            last_user_prompt: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn chat(&self, _system_prompt: String, user_prompt: String) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_prompt.lock().unwrap() = Some(user_prompt);
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub fn reviewer_for(provider: &Arc<StubProvider>) -> CodeReviewer {
    CodeReviewer::new(Arc::clone(provider) as Arc<dyn AiProvider>)
}

pub fn languages() -> Vec<String> {
    ["python", "javascript", "typescript", "java", "cpp", "go"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub const FULL_REVIEW_JSON: &str = r#"{
  "summary": "Mutable default argument shares state between calls.",
  "design_flaws": [
    {
      "severity": "major",
      "title": "Mutable default argument",
      "why_it_matters": "Items leak between calls.",
      "evidence": "def add(item, items=[]):",
      "fix": "Default to None and create the list inside."
    }
  ],
  "tests": [
    {
      "type": "unit",
      "title": "separate calls do not share items",
      "what_to_test": "Two calls return independent lists.",
      "example_test_code": "def test_add():\n    assert add(1) == [1]\n    assert add(2) == [2]"
    }
  ],
  "refactor": {
    "goals": ["Remove shared mutable default"],
    "patch": "def add(item, items=None):\n    items = [] if items is None else items"
  }
}"#;
