//! Gallery storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::GalleryItem;
use crate::repository::{Record, Repository};

impl Record for GalleryItem {
    const COLLECTION: &'static str = "gallery";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|g| std::cmp::Reverse(g.created_at));
    }
}

/// Repository for gallery storage and retrieval.
pub struct GalleryRepository {
    repo: Repository<GalleryItem>,
}

impl GalleryRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Store an uploaded image and persist it.
    pub fn add_image(
        &self,
        user: &UserId,
        name: impl Into<String>,
        data_url: impl Into<String>,
    ) -> GalleryItem {
        self.repo.insert(user, GalleryItem::new(name, data_url))
    }

    /// Delete the image with `id`; returns the remaining items.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<GalleryItem> {
        self.repo.remove(user, id)
    }

    /// All images, newest first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<GalleryItem> {
        self.repo.list(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maildesk_store::KeyBuilder;

    fn repo() -> GalleryRepository {
        GalleryRepository::new(CollectionStore::in_memory(KeyBuilder::new(
            "maildesk", "test-app",
        )))
    }

    #[test]
    fn add_and_remove_image() {
        let repo = repo();
        let user = UserId::new("u_test");

        let item = repo.add_image(&user, "cat.png", "data:image/png;base64,abc");
        assert_eq!(repo.list(&user).len(), 1);
        assert_eq!(repo.list(&user)[0].name, "cat.png");

        let remaining = repo.remove(&user, &item.id);
        assert!(remaining.is_empty());
    }

    #[test]
    fn removing_twice_is_harmless() {
        let repo = repo();
        let user = UserId::new("u_test");
        let item = repo.add_image(&user, "a.png", "data:,");
        repo.remove(&user, &item.id);
        let remaining = repo.remove(&user, &item.id);
        assert!(remaining.is_empty());
    }
}
