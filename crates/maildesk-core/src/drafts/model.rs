//! Draft data models.

use chrono::{DateTime, Utc};
use maildesk_store::{new_id, now_millis, to_datetime};
use serde::{Deserialize, Serialize};

/// What kind of item a draft will become when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftKind {
    /// An email being composed.
    Email,
    /// A to-do item being written up.
    Task,
    /// A free-form note.
    #[default]
    Note,
}

impl DraftKind {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Task => "task",
            Self::Note => "note",
        }
    }
}

/// A file attached to a draft, held inline as an encoded data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Original file name.
    pub name: String,
    /// Encoded file content.
    pub data_url: String,
}

/// An unfinished email, task, or note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Unique identifier.
    pub id: String,
    /// What the draft will become.
    #[serde(rename = "type")]
    pub kind: DraftKind,
    /// Title shown in lists.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Inline attachments.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Optional due date, milliseconds since epoch.
    #[serde(default)]
    pub due_date: Option<i64>,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
    /// Last modification time, refreshed on every update.
    pub updated_at: i64,
}

impl Draft {
    /// Build a new draft from partial input, filling identifier, timestamps
    /// and defaults for anything omitted.
    #[must_use]
    pub fn from_params(params: DraftParams) -> Self {
        let now = now_millis();
        Self {
            id: new_id(),
            kind: params.kind.unwrap_or_default(),
            title: params.title.unwrap_or_else(|| "Untitled".to_string()),
            content: params.content.unwrap_or_default(),
            attachments: params.attachments,
            due_date: params.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// The due date as a [`DateTime<Utc>`], if one is set and in range.
    #[must_use]
    pub fn due_date_utc(&self) -> Option<DateTime<Utc>> {
        self.due_date.and_then(to_datetime)
    }
}

/// Partial input for creating a draft; omitted fields get defaults.
#[derive(Debug, Clone, Default)]
pub struct DraftParams {
    /// Draft kind; defaults to [`DraftKind::Note`].
    pub kind: Option<DraftKind>,
    /// Title; defaults to "Untitled".
    pub title: Option<String>,
    /// Body text; defaults to empty.
    pub content: Option<String>,
    /// Attachments; defaults to none.
    pub attachments: Vec<Attachment>,
    /// Due date in milliseconds since epoch.
    pub due_date: Option<i64>,
}

/// A shallow merge applied to an existing draft.
///
/// `None` fields are left untouched; `due_date` uses a nested option so a
/// set due date can be cleared.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    /// Replace the kind.
    pub kind: Option<DraftKind>,
    /// Replace the title.
    pub title: Option<String>,
    /// Replace the body text.
    pub content: Option<String>,
    /// Replace the attachment list.
    pub attachments: Option<Vec<Attachment>>,
    /// Set (`Some(Some(ms))`) or clear (`Some(None)`) the due date.
    pub due_date: Option<Option<i64>>,
}

impl DraftPatch {
    /// Merge this patch into `draft`, field by field.
    pub fn apply(self, draft: &mut Draft) {
        if let Some(kind) = self.kind {
            draft.kind = kind;
        }
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(content) = self.content {
            draft.content = content;
        }
        if let Some(attachments) = self.attachments {
            draft.attachments = attachments;
        }
        if let Some(due_date) = self.due_date {
            draft.due_date = due_date;
        }
    }
}
