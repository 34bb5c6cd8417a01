//! Success/failure envelope returned to callers.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, SparkError};
use crate::types::story::StoryDraft;

/// Outcome of a generation flow.
///
/// Flows never return a raw error across this boundary: every failure is
/// classified and carried here with a user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StoryOutcome {
    Success { data: StoryDraft },
    Failure { kind: ErrorKind, message: String },
}

impl StoryOutcome {
    /// Build a failure from a classified error, using the fixed message table.
    pub fn from_error(error: &SparkError) -> Self {
        let kind = error.kind();
        Self::Failure {
            kind,
            message: kind.user_message().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The draft, if this outcome is a success.
    pub fn into_data(self) -> Option<StoryDraft> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }
}
