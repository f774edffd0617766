//! Note data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A free-form note with a display color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier.
    pub id: String,
    /// Title shown in the note list.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Display color token.
    #[serde(default)]
    pub color: String,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
    /// Last modification time, refreshed on every update.
    pub updated_at: i64,
}

impl Note {
    /// Build a new note, filling defaults for anything omitted.
    #[must_use]
    pub fn from_params(params: NoteParams) -> Self {
        let now = now_millis();
        Self {
            id: new_id(),
            title: params.title.unwrap_or_else(|| "New Note".to_string()),
            content: params.content.unwrap_or_default(),
            color: params.color.unwrap_or_else(|| "blue".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the note's title or content contains `query`,
    /// case-insensitively.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
    }
}

/// Partial input for creating a note.
#[derive(Debug, Clone, Default)]
pub struct NoteParams {
    /// Title; defaults to "New Note".
    pub title: Option<String>,
    /// Body text; defaults to empty.
    pub content: Option<String>,
    /// Display color; defaults to "blue".
    pub color: Option<String>,
}

/// A shallow merge applied to an existing note.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    /// Replace the title.
    pub title: Option<String>,
    /// Replace the body text.
    pub content: Option<String>,
    /// Replace the display color.
    pub color: Option<String>,
}

impl NotePatch {
    /// Merge this patch into `note`.
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
    }
}
