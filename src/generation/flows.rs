//! Generation flows: validate input, invoke the model with retry, and
//! normalize every result into a [`StoryOutcome`].

use std::time::Duration;

use tracing::warn;

use crate::error::{ErrorKind, SparkError};
use crate::provider::{PromptRequest, StoryModel};
use crate::types::{StoryOutcome, StoryRequest};
use crate::util::retry::RetryPolicy;
use crate::util::timeout::with_timeout;

use super::{draft, prompt};

const REQUIRED_FIELDS_MESSAGE: &str = "Title and description are required.";

/// Deadline for one model call when the prompt does not set its own.
const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Generate a user story from a title and description.
///
/// Never returns an error: failures come back as [`StoryOutcome::Failure`]
/// with a user-facing message.
pub async fn generate_user_story(
    model: &dyn StoryModel,
    request: &StoryRequest,
) -> StoryOutcome {
    run_flow(model, request, prompt::generate_prompt(request)).await
}

/// Regenerate a user story from edited input. Same contract as
/// [`generate_user_story`], different prompt.
pub async fn regenerate_user_story(
    model: &dyn StoryModel,
    request: &StoryRequest,
) -> StoryOutcome {
    run_flow(model, request, prompt::regenerate_prompt(request)).await
}

async fn run_flow(
    model: &dyn StoryModel,
    request: &StoryRequest,
    prompt: PromptRequest,
) -> StoryOutcome {
    if !request.is_valid() {
        return StoryOutcome::Failure {
            kind: ErrorKind::Validation,
            message: REQUIRED_FIELDS_MESSAGE.to_string(),
        };
    }

    let result = RetryPolicy::default()
        .execute(|| {
            let prompt = prompt.clone();
            async move {
                let timeout = prompt
                    .options
                    .request_timeout
                    .unwrap_or(DEFAULT_CALL_TIMEOUT);
                let text = with_timeout(timeout, model.complete(&prompt)).await?;
                let draft = draft::parse_draft(&text)?;
                // An incomplete draft is treated like any transient fault
                // and retried; it carries no status code, so it classifies
                // as unknown rather than validation.
                if !draft.is_complete() {
                    return Err(SparkError::Incomplete(
                        "AI returned incomplete response".into(),
                    ));
                }
                Ok(draft)
            }
        })
        .await;

    match result {
        Ok(data) => StoryOutcome::Success { data },
        Err(e) => {
            warn!(model = model.model_id(), kind = %e.kind(), error = %e, "Story generation failed");
            StoryOutcome::from_error(&e)
        }
    }
}
