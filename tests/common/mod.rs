//! Shared test helpers and mock generation backend.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use storyspark::error::SparkError;
use storyspark::provider::{PromptRequest, StoryModel};

/// A complete draft as the model would emit it.
pub const DRAFT_JSON: &str = r#"{
    "userStory": "As a user, I want to log in so that I can access my dashboard.",
    "acceptanceCriteria": ["Login form validates credentials", "Errors are shown inline"],
    "additionalNotes": "Consider 2FA.",
    "difficulty": "Medium",
    "priority": "High",
    "estimatedTime": "3-5 days"
}"#;

/// A "successful" response that is missing its acceptance criteria.
pub const INCOMPLETE_DRAFT_JSON: &str = r#"{
    "userStory": "As a user, I want to log in.",
    "acceptanceCriteria": [],
    "additionalNotes": "",
    "difficulty": "Easy",
    "priority": "Low",
    "estimatedTime": "1 day"
}"#;

/// A mock backend that returns queued results in order.
pub struct MockModel {
    model_id: String,
    results: Mutex<Vec<Result<String, SparkError>>>,
    calls: AtomicUsize,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            model_id: "mock-model".to_string(),
            results: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue raw model text for the next call.
    pub fn queue_text(&self, text: &str) {
        self.results.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue an error for the next call.
    pub fn queue_error(&self, error: SparkError) {
        self.results.lock().unwrap().push(Err(error));
    }

    /// How many times `complete` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoryModel for MockModel {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, _request: &PromptRequest) -> Result<String, SparkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Ok(DRAFT_JSON.to_string());
        }
        results.remove(0)
    }
}

/// A connection-level reqwest error (no status code, not a timeout).
pub fn network_error() -> SparkError {
    SparkError::Network(
        reqwest::Client::new()
            .get("http://[::1")
            .build()
            .unwrap_err(),
    )
}
