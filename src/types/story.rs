//! Story request and draft types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// User-supplied input for a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub title: String,
    pub description: String,
}

impl StoryRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Both fields must contain something other than whitespace.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Implementation difficulty of the described feature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Delivery priority of the described feature.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A generated user story as returned by the model.
///
/// Field names follow the JSON object the model is instructed to emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    #[serde(default)]
    pub user_story: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub additional_notes: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    #[serde(default)]
    pub estimated_time: String,
}

impl StoryDraft {
    /// A usable draft has a narrative and at least one acceptance criterion.
    /// Difficulty and priority are guaranteed by deserialization.
    pub fn is_complete(&self) -> bool {
        !self.user_story.trim().is_empty() && !self.acceptance_criteria.is_empty()
    }
}
