//! Chat data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A message thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique identifier.
    pub id: String,
    /// Thread title.
    pub title: String,
    /// Bumped whenever a message is added, milliseconds since epoch.
    pub updated_at: i64,
}

impl Conversation {
    /// Start a new conversation.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            updated_at: now_millis(),
        }
    }
}

/// One message within a conversation.
///
/// Messages reference their conversation by id only; nothing enforces that
/// the conversation still exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier.
    pub id: String,
    /// Id of the conversation this message belongs to.
    pub conversation_id: String,
    /// Sender label.
    pub from: String,
    /// Message text.
    pub text: String,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
}

impl Message {
    /// Build a new message for `conversation_id`.
    #[must_use]
    pub fn new(
        conversation_id: impl Into<String>,
        from: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            conversation_id: conversation_id.into(),
            from: from.into(),
            text: text.into(),
            created_at: now_millis(),
        }
    }
}
