//! Favorite storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Favorite, FavoriteParams, FavoritePatch};
use crate::repository::{Record, Repository};

impl Record for Favorite {
    const COLLECTION: &'static str = "favorites";

    fn id(&self) -> &str {
        &self.id
    }

    // Most recently starred first. favorite_date is set once, so updates do
    // not reorder the list.
    fn sort(records: &mut [Self]) {
        records.sort_by_key(|f| std::cmp::Reverse(f.favorite_date));
    }
}

/// Repository for favorite storage and retrieval.
pub struct FavoriteRepository {
    repo: Repository<Favorite>,
}

impl FavoriteRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Star a new item and persist it.
    pub fn create(&self, user: &UserId, params: FavoriteParams) -> Favorite {
        self.repo.insert(user, Favorite::from_params(params))
    }

    /// Shallow-merge `patch` into the favorite with `id`.
    ///
    /// Returns `None` if no favorite matched. The favorite date is never
    /// refreshed.
    pub fn update(&self, user: &UserId, id: &str, patch: FavoritePatch) -> Option<Favorite> {
        self.repo.update_with(user, id, |favorite| patch.apply(favorite))
    }

    /// Un-star the favorite with `id`; returns the remaining favorites.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Favorite> {
        self.repo.remove(user, id)
    }

    /// All favorites, most recently starred first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Favorite> {
        self.repo.list(user)
    }
}
