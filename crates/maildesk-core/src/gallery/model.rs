//! Gallery data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// An image kept entirely inline as an encoded data URL.
///
/// No update operation exists for gallery items; they are added and
/// removed whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Unique identifier.
    pub id: String,
    /// Original file name.
    pub name: String,
    /// Encoded image content.
    pub data_url: String,
    /// Upload time, milliseconds since epoch.
    pub created_at: i64,
}

impl GalleryItem {
    /// Build a new gallery item from a file name and its encoded content.
    #[must_use]
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            data_url: data_url.into(),
            created_at: now_millis(),
        }
    }
}
