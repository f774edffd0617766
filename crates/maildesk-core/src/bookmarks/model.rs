//! Bookmark data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A saved page, grouped by category and tagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Page address.
    pub url: String,
    /// Grouping category, e.g. "Work" or "Reading".
    #[serde(default)]
    pub category: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
}

impl Bookmark {
    /// Build a new bookmark, filling defaults for anything omitted.
    #[must_use]
    pub fn from_params(params: BookmarkParams) -> Self {
        Self {
            id: new_id(),
            title: params.title.unwrap_or_else(|| "Untitled".to_string()),
            url: params.url.unwrap_or_default(),
            category: params.category.unwrap_or_else(|| "General".to_string()),
            tags: params.tags,
            created_at: now_millis(),
        }
    }

    /// Whether title, url, or any tag contains `query`, case-insensitively.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.url.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Partial input for creating a bookmark.
#[derive(Debug, Clone, Default)]
pub struct BookmarkParams {
    /// Display title; defaults to "Untitled".
    pub title: Option<String>,
    /// Page address.
    pub url: Option<String>,
    /// Category; defaults to "General".
    pub category: Option<String>,
    /// Tags; defaults to none.
    pub tags: Vec<String>,
}

/// A shallow merge applied to an existing bookmark.
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    /// Replace the title.
    pub title: Option<String>,
    /// Replace the url.
    pub url: Option<String>,
    /// Replace the category.
    pub category: Option<String>,
    /// Replace the tag list.
    pub tags: Option<Vec<String>>,
}

impl BookmarkPatch {
    /// Merge this patch into `bookmark`.
    pub fn apply(self, bookmark: &mut Bookmark) {
        if let Some(title) = self.title {
            bookmark.title = title;
        }
        if let Some(url) = self.url {
            bookmark.url = url;
        }
        if let Some(category) = self.category {
            bookmark.category = category;
        }
        if let Some(tags) = self.tags {
            bookmark.tags = tags;
        }
    }
}
