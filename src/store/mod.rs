//! In-memory state for saved stories and generation history.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{StoryDraft, StoryRequest};

/// A generated story bound to an identity and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub draft: StoryDraft,
    pub created_at: DateTime<Utc>,
}

impl StoryRecord {
    pub fn new(title: impl Into<String>, draft: StoryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            draft,
            created_at: Utc::now(),
        }
    }
}

/// One past generation: the input that was submitted and the narrative
/// it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub user_story: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(request: &StoryRequest, draft: &StoryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            description: request.description.clone(),
            user_story: draft.user_story.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Shared application state holder.
///
/// Cheap to clone; all clones see the same lists. Nothing here persists
/// beyond the process.
#[derive(Clone, Default)]
pub struct StoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    saved: Vec<StoryRecord>,
    history: Vec<HistoryEntry>,
}

impl StoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a story. Newest stories list first.
    pub fn add_saved(&self, record: StoryRecord) {
        self.inner.write().unwrap().saved.insert(0, record);
    }

    pub fn saved_stories(&self) -> Vec<StoryRecord> {
        self.inner.read().unwrap().saved.clone()
    }

    /// Remove a saved story by id. Returns whether anything was removed.
    pub fn remove_saved(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.saved.len();
        inner.saved.retain(|record| record.id != id);
        inner.saved.len() < before
    }

    /// Record a generation in the history. Newest entries list first.
    pub fn add_history(&self, entry: HistoryEntry) {
        self.inner.write().unwrap().history.insert(0, entry);
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.read().unwrap().history.clone()
    }
}
