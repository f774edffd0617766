//! Link data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A saved link with optional tags and thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Link target.
    #[serde(default)]
    pub url: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional thumbnail, held inline as an encoded data URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
}

impl Link {
    /// Build a new link. The title falls back to the url, then to
    /// "Untitled".
    #[must_use]
    pub fn from_params(params: LinkParams) -> Self {
        let url = params.url.unwrap_or_default();
        let title = params
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| if url.is_empty() { "Untitled".to_string() } else { url.clone() });
        Self {
            id: new_id(),
            title,
            url,
            tags: params.tags,
            thumbnail: params.thumbnail.unwrap_or_default(),
            created_at: now_millis(),
        }
    }
}

/// Partial input for creating a link.
#[derive(Debug, Clone, Default)]
pub struct LinkParams {
    /// Display title; falls back to the url.
    pub title: Option<String>,
    /// Link target.
    pub url: Option<String>,
    /// Tags; defaults to none.
    pub tags: Vec<String>,
    /// Thumbnail data URL.
    pub thumbnail: Option<String>,
}

/// A shallow merge applied to an existing link.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    /// Replace the title.
    pub title: Option<String>,
    /// Replace the url.
    pub url: Option<String>,
    /// Replace the tag list.
    pub tags: Option<Vec<String>>,
    /// Replace the thumbnail.
    pub thumbnail: Option<String>,
}

impl LinkPatch {
    /// Merge this patch into `link`.
    pub fn apply(self, link: &mut Link) {
        if let Some(title) = self.title {
            link.title = title;
        }
        if let Some(url) = self.url {
            link.url = url;
        }
        if let Some(tags) = self.tags {
            link.tags = tags;
        }
        if let Some(thumbnail) = self.thumbnail {
            link.thumbnail = thumbnail;
        }
    }
}
