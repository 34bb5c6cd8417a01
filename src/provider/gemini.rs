//! Google Gemini API backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::SparkError;

use super::http::{shared_client, status_to_error};
use super::{PromptRequest, StoryModel};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn build_request_body(&self, request: &PromptRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": request.user}],
            }],
        });

        let obj = body.as_object_mut().unwrap();

        if let Some(ref system) = request.system {
            obj.insert(
                "systemInstruction".into(),
                serde_json::json!({"parts": [{"text": system}]}),
            );
        }

        // Drafts are always requested as JSON objects.
        let mut gen_config = serde_json::Map::new();
        gen_config.insert("responseMimeType".into(), "application/json".into());
        if let Some(max) = request.options.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(temp) = request.options.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        obj.insert(
            "generationConfig".into(),
            serde_json::Value::Object(gen_config),
        );

        body
    }
}

#[async_trait]
impl StoryModel for GeminiProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &PromptRequest) -> Result<String, SparkError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Gemini complete");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| SparkError::api(200, "No candidates in Gemini response"))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        Ok(text)
    }
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
