//! Link storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Link, LinkParams, LinkPatch};
use crate::repository::{Record, Repository};

impl Record for Link {
    const COLLECTION: &'static str = "links";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|l| std::cmp::Reverse(l.created_at));
    }
}

/// Repository for link storage and retrieval.
pub struct LinkRepository {
    repo: Repository<Link>,
}

impl LinkRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Save a new link and persist it.
    pub fn create(&self, user: &UserId, params: LinkParams) -> Link {
        self.repo.insert(user, Link::from_params(params))
    }

    /// Shallow-merge `patch` into the link with `id`; `None` if not found.
    pub fn update(&self, user: &UserId, id: &str, patch: LinkPatch) -> Option<Link> {
        self.repo.update_with(user, id, |link| patch.apply(link))
    }

    /// Delete the link with `id`; returns the remaining links.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Link> {
        self.repo.remove(user, id)
    }

    /// All links, newest first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Link> {
        self.repo.list(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maildesk_store::KeyBuilder;

    fn repo() -> LinkRepository {
        LinkRepository::new(CollectionStore::in_memory(KeyBuilder::new(
            "maildesk", "test-app",
        )))
    }

    #[test]
    fn create_update_remove_cycle() {
        let repo = repo();
        let user = UserId::new("u_test");

        let link = repo.create(
            &user,
            LinkParams {
                url: Some("https://example.com/post".to_string()),
                ..LinkParams::default()
            },
        );
        assert_eq!(repo.list(&user).len(), 1);

        let updated = repo
            .update(
                &user,
                &link.id,
                LinkPatch {
                    title: Some("A post".to_string()),
                    ..LinkPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "A post");
        assert_eq!(updated.url, "https://example.com/post");

        let remaining = repo.remove(&user, &link.id);
        assert!(remaining.is_empty());
    }

    #[test]
    fn update_unknown_link_returns_none() {
        let repo = repo();
        let user = UserId::new("u_test");
        assert!(repo.update(&user, "missing", LinkPatch::default()).is_none());
    }
}
