//! Parsing model output into a story draft.

use crate::error::SparkError;
use crate::types::StoryDraft;

/// Parse the model's raw text into a draft.
///
/// Models occasionally wrap JSON in markdown fences even when asked not
/// to, so fences are stripped before deserializing.
pub fn parse_draft(text: &str) -> Result<StoryDraft, SparkError> {
    let json_text = strip_code_fences(text);
    let draft: StoryDraft = serde_json::from_str(&json_text)?;
    Ok(draft)
}

/// Strip markdown code fences from a JSON response.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        let without_opening = if let Some(rest) = trimmed.strip_prefix("```json") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("```") {
            rest
        } else {
            trimmed
        };
        if let Some(stripped) = without_opening.strip_suffix("```") {
            return stripped.trim().to_string();
        }
        return without_opening.trim().to_string();
    }
    trimmed.to_string()
}
