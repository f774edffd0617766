//! Favorite data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// A starred item: anything the user wants to keep within reach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: String,
    /// Optional link target.
    #[serde(default)]
    pub url: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the item was starred, milliseconds since epoch. Set once at
    /// creation and never refreshed.
    pub favorite_date: i64,
}

impl Favorite {
    /// Build a new favorite, filling defaults for anything omitted.
    #[must_use]
    pub fn from_params(params: FavoriteParams) -> Self {
        Self {
            id: new_id(),
            name: params.name.unwrap_or_else(|| "Untitled".to_string()),
            description: params.description.unwrap_or_default(),
            url: params.url.unwrap_or_default(),
            tags: params.tags,
            favorite_date: now_millis(),
        }
    }
}

/// Partial input for creating a favorite.
#[derive(Debug, Clone, Default)]
pub struct FavoriteParams {
    /// Display name; defaults to "Untitled".
    pub name: Option<String>,
    /// Description; defaults to empty.
    pub description: Option<String>,
    /// Link target; defaults to empty.
    pub url: Option<String>,
    /// Tags; defaults to none.
    pub tags: Vec<String>,
}

/// A shallow merge applied to an existing favorite.
///
/// Note there is deliberately no way to change `favorite_date`.
#[derive(Debug, Clone, Default)]
pub struct FavoritePatch {
    /// Replace the name.
    pub name: Option<String>,
    /// Replace the description.
    pub description: Option<String>,
    /// Replace the url.
    pub url: Option<String>,
    /// Replace the tag list.
    pub tags: Option<Vec<String>>,
}

impl FavoritePatch {
    /// Merge this patch into `favorite`.
    pub fn apply(self, favorite: &mut Favorite) {
        if let Some(name) = self.name {
            favorite.name = name;
        }
        if let Some(description) = self.description {
            favorite.description = description;
        }
        if let Some(url) = self.url {
            favorite.url = url;
        }
        if let Some(tags) = self.tags {
            favorite.tags = tags;
        }
    }
}
