//! Convenience entry points using the global configuration.

use crate::config::SparkConfig;
use crate::provider;
use crate::types::{StoryOutcome, StoryRequest};

/// Generate a story with the configured backend: title + description → outcome.
pub async fn generate(
    title: impl Into<String>,
    description: impl Into<String>,
) -> StoryOutcome {
    let request = StoryRequest::new(title, description);
    let model = match provider::create_model(SparkConfig::global()) {
        Ok(model) => model,
        Err(e) => return StoryOutcome::from_error(&e),
    };
    super::flows::generate_user_story(model.as_ref(), &request).await
}

/// Regenerate a story with the configured backend.
pub async fn regenerate(
    title: impl Into<String>,
    description: impl Into<String>,
) -> StoryOutcome {
    let request = StoryRequest::new(title, description);
    let model = match provider::create_model(SparkConfig::global()) {
        Ok(model) => model,
        Err(e) => return StoryOutcome::from_error(&e),
    };
    super::flows::regenerate_user_story(model.as_ref(), &request).await
}
