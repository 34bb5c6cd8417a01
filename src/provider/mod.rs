//! Generation backend trait and implementations.

pub mod gemini;
pub mod http;

use async_trait::async_trait;
use bon::Builder;

use crate::config::SparkConfig;
use crate::error::SparkError;

/// Options controlling a single model call.
#[derive(Debug, Clone, Builder, Default)]
pub struct GenerationOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// Deadline for one completion call. Flows fall back to a default
    /// when unset.
    pub request_timeout: Option<std::time::Duration>,
}

/// A prompt handed to a generation backend.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub system: Option<String>,
    pub user: String,
    pub options: GenerationOptions,
}

/// Core trait implemented by generation backends.
///
/// The backend is opaque to the rest of the crate: it takes a prompt and
/// either returns the model's raw text or raises a [`SparkError`] carrying
/// whatever the transport knows (status code, timeout, connectivity).
#[async_trait]
pub trait StoryModel: Send + Sync {
    /// Backend name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this backend instance serves.
    fn model_id(&self) -> &str;

    /// Run one completion and return the raw model text.
    async fn complete(&self, request: &PromptRequest) -> Result<String, SparkError>;
}

/// Create the configured generation backend.
pub fn create_model(config: &SparkConfig) -> Result<Box<dyn StoryModel>, SparkError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| SparkError::Configuration("Missing GOOGLE_API_KEY".into()))?;
    Ok(Box::new(gemini::GeminiProvider::new(
        config.model(),
        api_key,
        config.base_url(),
    )))
}
