//! Notification data models.

use chrono::{DateTime, Utc};
use maildesk_store::{new_id, now_millis, to_datetime};
use serde::{Deserialize, Serialize};

/// An in-app alert shown in the notification panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Optional body text.
    #[serde(default)]
    pub body: String,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
    /// Whether the user has seen it. Defaults to false.
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Build a new unread notification.
    #[must_use]
    pub fn new(title: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            body: body.unwrap_or_default().to_string(),
            created_at: now_millis(),
            read: false,
        }
    }

    /// Creation time as a [`DateTime<Utc>`], if in range.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.created_at)
    }
}
