//! Convenience re-exports for common use.

pub use crate::config::SparkConfig;
pub use crate::error::{ErrorKind, Result, SparkError};
pub use crate::provider::{GenerationOptions, PromptRequest, StoryModel};
pub use crate::store::{HistoryEntry, StoryRecord, StoryStore};
pub use crate::types::{Difficulty, Priority, StoryDraft, StoryOutcome, StoryRequest};
pub use crate::util::retry::RetryPolicy;
