//! Prompt templates for the generate and regenerate flows.

use crate::provider::{GenerationOptions, PromptRequest};
use crate::types::StoryRequest;

const GENERATE_SYSTEM: &str = "You are a product manager expert in writing user stories.";

const REGENERATE_SYSTEM: &str =
    "You are an AI that helps regenerate user stories based on a title and description.";

const OUTPUT_SHAPE: &str = "\
The output should be a JSON object with the following keys:
- userStory: A complete user story.
- acceptanceCriteria: An array of acceptance criteria for the user story.
- additionalNotes: Additional notes or details about the feature.
- difficulty: The difficulty of implementing the feature (Easy, Medium, Hard).
- priority: The priority of the feature (High, Medium, Low).
- estimatedTime: Estimated time to complete the feature.";

/// Prompt for a fresh generation.
pub fn generate_prompt(request: &StoryRequest) -> PromptRequest {
    let user = format!(
        "Based on the title and description provided, generate a complete user story, \
acceptance criteria, additional notes, difficulty, priority and estimated time.\n\n\
Title: {}\nDescription: {}\n\n{}",
        request.title, request.description, OUTPUT_SHAPE,
    );
    PromptRequest {
        system: Some(GENERATE_SYSTEM.to_string()),
        user,
        options: GenerationOptions::default(),
    }
}

/// Prompt for regenerating an existing story from edited input.
pub fn regenerate_prompt(request: &StoryRequest) -> PromptRequest {
    let user = format!(
        "Title: {}\nDescription: {}\n\n\
Generate a user story, acceptance criteria, additional notes, difficulty, priority, \
and estimated time based on the title and description.\n\
The user story should follow the format: As a [user type], I want [goal] so that [benefit].\n\
The acceptance criteria should be a list of criteria that must be met for the user story \
to be considered complete.\n\n{}",
        request.title, request.description, OUTPUT_SHAPE,
    );
    PromptRequest {
        system: Some(REGENERATE_SYSTEM.to_string()),
        user,
        options: GenerationOptions::default(),
    }
}
