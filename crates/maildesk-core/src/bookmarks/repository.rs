//! Bookmark storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Bookmark, BookmarkParams, BookmarkPatch};
use crate::repository::{Record, Repository};

impl Record for Bookmark {
    const COLLECTION: &'static str = "bookmarks";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|b| std::cmp::Reverse(b.created_at));
    }
}

/// Repository for bookmark storage and retrieval.
pub struct BookmarkRepository {
    repo: Repository<Bookmark>,
}

impl BookmarkRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Save a new bookmark and persist it.
    pub fn create(&self, user: &UserId, params: BookmarkParams) -> Bookmark {
        self.repo.insert(user, Bookmark::from_params(params))
    }

    /// Shallow-merge `patch` into the bookmark with `id`; `None` if not
    /// found.
    pub fn update(&self, user: &UserId, id: &str, patch: BookmarkPatch) -> Option<Bookmark> {
        self.repo.update_with(user, id, |bookmark| patch.apply(bookmark))
    }

    /// Delete the bookmark with `id`; returns the remaining bookmarks.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Bookmark> {
        self.repo.remove(user, id)
    }

    /// All bookmarks, newest first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Bookmark> {
        self.repo.list(user)
    }

    /// Bookmarks matching `query` over title, url, and tags.
    #[must_use]
    pub fn search(&self, user: &UserId, query: &str) -> Vec<Bookmark> {
        let mut bookmarks = self.list(user);
        bookmarks.retain(|b| b.matches(query));
        bookmarks
    }

    /// Bookmarks in `category`, newest first.
    #[must_use]
    pub fn by_category(&self, user: &UserId, category: &str) -> Vec<Bookmark> {
        let mut bookmarks = self.list(user);
        bookmarks.retain(|b| b.category == category);
        bookmarks
    }

    /// Distinct categories in use, sorted alphabetically.
    #[must_use]
    pub fn categories(&self, user: &UserId) -> Vec<String> {
        let mut categories: Vec<String> =
            self.list(user).into_iter().map(|b| b.category).collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
