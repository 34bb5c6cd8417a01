//! Tests for the generation flows: input validation, outcome
//! normalization, and retry behavior end to end.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;

use common::{MockModel, DRAFT_JSON, INCOMPLETE_DRAFT_JSON};
use storyspark::error::{ErrorKind, SparkError};
use storyspark::generation::{generate_user_story, regenerate_user_story};
use storyspark::types::{Difficulty, Priority, StoryOutcome, StoryRequest};

#[tokio::test(start_paused = true)]
async fn valid_input_first_call_success() {
    let model = MockModel::new();
    model.queue_text(DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need to log in");
    let start = tokio::time::Instant::now();

    let outcome = generate_user_story(&model, &request).await;

    let data = outcome.into_data().expect("expected success");
    assert_eq!(
        data.user_story,
        "As a user, I want to log in so that I can access my dashboard."
    );
    assert_eq!(data.difficulty, Difficulty::Medium);
    assert_eq!(data.priority, Priority::High);
    assert_eq!(model.call_count(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn transient_failures_then_success() {
    let model = MockModel::new();
    model.queue_error(common::network_error());
    model.queue_error(common::network_error());
    model.queue_text(DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need to log in");
    let start = tokio::time::Instant::now();

    let outcome = generate_user_story(&model, &request).await;

    assert!(outcome.is_success());
    assert_eq!(model.call_count(), 3);
    // Two inter-attempt delays, each at or above its exponential floor.
    assert!(start.elapsed() >= Duration::from_millis(3000));
}

#[tokio::test]
async fn empty_title_short_circuits_without_calling_model() {
    let model = MockModel::new();
    let request = StoryRequest::new("", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Validation,
            message: "Title and description are required.".to_string(),
        }
    );
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn whitespace_description_short_circuits_without_calling_model() {
    let model = MockModel::new();
    let request = StoryRequest::new("Login", "   ");

    let outcome = generate_user_story(&model, &request).await;

    assert!(matches!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Validation,
            ..
        }
    ));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn incomplete_draft_is_retried_then_surfaced_as_failure() {
    let model = MockModel::new();
    model.queue_text(INCOMPLETE_DRAFT_JSON);
    model.queue_text(INCOMPLETE_DRAFT_JSON);
    model.queue_text(INCOMPLETE_DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    // The call "succeeded" at the transport level, but the draft is not
    // usable; it is treated as a transient fault and retried.
    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Unknown,
            message: "An unexpected error occurred. Please try again later.".to_string(),
        }
    );
    assert_eq!(model.call_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn incomplete_draft_then_complete_draft_succeeds() {
    let model = MockModel::new();
    model.queue_text(INCOMPLETE_DRAFT_JSON);
    model.queue_text(DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert!(outcome.is_success());
    assert_eq!(model.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn unparseable_model_output_is_retried() {
    let model = MockModel::new();
    model.queue_text("I'm sorry, I can't produce JSON today.");
    model.queue_text(DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert!(outcome.is_success());
    assert_eq!(model.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn server_errors_exhaust_retries_with_service_message() {
    let model = MockModel::new();
    model.queue_error(SparkError::api(503, "overloaded"));
    model.queue_error(SparkError::api(503, "overloaded"));
    model.queue_error(SparkError::api(503, "overloaded"));
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Api,
            message: "The AI service is currently unavailable. Please try again later."
                .to_string(),
        }
    );
    assert_eq!(model.call_count(), 3);
}

#[tokio::test]
async fn client_error_status_is_terminal_on_first_attempt() {
    let model = MockModel::new();
    model.queue_error(SparkError::api(400, "bad request"));
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Validation,
            message: "Invalid input. Please check your input and try again.".to_string(),
        }
    );
    assert_eq!(model.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn timeout_errors_surface_with_timeout_message() {
    let model = MockModel::new();
    model.queue_error(SparkError::Timeout(60_000));
    model.queue_error(SparkError::Timeout(60_000));
    model.queue_error(SparkError::Timeout(60_000));
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Timeout,
            message: "The operation timed out. Please try again later.".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn draft_missing_acceptance_criteria_key_is_failure() {
    let json = r#"{
        "userStory": "As a user, I want to log in.",
        "difficulty": "Easy",
        "priority": "Low"
    }"#;
    let model = MockModel::new();
    model.queue_text(json);
    model.queue_text(json);
    model.queue_text(json);
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&model, &request).await;

    assert!(matches!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Unknown,
            ..
        }
    ));
    assert_eq!(model.call_count(), 3);
}

/// A backend whose calls never resolve.
struct HangingModel;

#[async_trait::async_trait]
impl storyspark::provider::StoryModel for HangingModel {
    fn provider_name(&self) -> &str {
        "hang"
    }

    fn model_id(&self) -> &str {
        "hang-model"
    }

    async fn complete(
        &self,
        _request: &storyspark::provider::PromptRequest,
    ) -> Result<String, SparkError> {
        std::future::pending().await
    }
}

#[tokio::test(start_paused = true)]
async fn hung_calls_hit_the_deadline_and_surface_timeout() {
    let request = StoryRequest::new("Login", "Users need to log in");

    let outcome = generate_user_story(&HangingModel, &request).await;

    assert_eq!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Timeout,
            message: "The operation timed out. Please try again later.".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn regenerate_shares_the_same_contract() {
    let model = MockModel::new();
    model.queue_text(DRAFT_JSON);
    let request = StoryRequest::new("Login", "Users need passwordless login");

    let outcome = regenerate_user_story(&model, &request).await;

    assert!(outcome.is_success());
    assert_eq!(model.call_count(), 1);

    let empty = StoryRequest::new("", "");
    let outcome = regenerate_user_story(&model, &empty).await;
    assert!(matches!(
        outcome,
        StoryOutcome::Failure {
            kind: ErrorKind::Validation,
            ..
        }
    ));
    assert_eq!(model.call_count(), 1);
}
