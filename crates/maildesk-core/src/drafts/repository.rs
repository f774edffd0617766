//! Draft storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Draft, DraftParams, DraftPatch};
use crate::repository::{Record, Repository};

impl Record for Draft {
    const COLLECTION: &'static str = "drafts";

    fn id(&self) -> &str {
        &self.id
    }

    // Most recently edited first.
    fn sort(records: &mut [Self]) {
        records.sort_by_key(|d| std::cmp::Reverse(d.updated_at));
    }

    fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms;
    }
}

/// Repository for draft storage and retrieval.
pub struct DraftRepository {
    repo: Repository<Draft>,
}

impl DraftRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Create a draft from partial input and persist it.
    ///
    /// Fills a generated id, creation/update timestamps, and the defaults
    /// for any omitted fields, then returns the stored draft.
    pub fn create(&self, user: &UserId, params: DraftParams) -> Draft {
        self.repo.insert(user, Draft::from_params(params))
    }

    /// Shallow-merge `patch` into the draft with `id` and refresh its
    /// update timestamp.
    ///
    /// Returns `None` if no draft matched.
    pub fn update(&self, user: &UserId, id: &str, patch: DraftPatch) -> Option<Draft> {
        self.repo.update_with(user, id, |draft| patch.apply(draft))
    }

    /// Delete the draft with `id`; returns the remaining drafts.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Draft> {
        self.repo.remove(user, id)
    }

    /// All drafts, most recently edited first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Draft> {
        self.repo.list(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::drafts::DraftKind;
    use maildesk_store::KeyBuilder;

    fn repo() -> DraftRepository {
        DraftRepository::new(CollectionStore::in_memory(KeyBuilder::new(
            "maildesk", "test-app",
        )))
    }

    #[test]
    fn create_fills_id_and_timestamps() {
        let repo = repo();
        let user = UserId::new("u_test");

        let draft = repo.create(
            &user,
            DraftParams {
                title: Some("Buy milk".to_string()),
                ..DraftParams::default()
            },
        );

        assert!(!draft.id.is_empty());
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.created_at, draft.updated_at);

        let listed = repo.list(&user);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Buy milk");
    }

    #[test]
    fn creates_yield_distinct_ids() {
        let repo = repo();
        let user = UserId::new("u_test");
        let ids: Vec<String> = (0..5)
            .map(|_| repo.create(&user, DraftParams::default()).id)
            .collect();
        let listed = repo.list(&user);
        assert_eq!(listed.len(), 5);
        for id in &ids {
            assert_eq!(listed.iter().filter(|d| &d.id == id).count(), 1);
        }
    }

    #[test]
    fn update_refreshes_updated_at_and_sorts_first() {
        let repo = repo();
        let user = UserId::new("u_test");
        let first = repo.create(
            &user,
            DraftParams {
                title: Some("first".to_string()),
                ..DraftParams::default()
            },
        );
        repo.create(
            &user,
            DraftParams {
                title: Some("second".to_string()),
                ..DraftParams::default()
            },
        );

        let updated = repo
            .update(
                &user,
                &first.id,
                DraftPatch {
                    content: Some("edited".to_string()),
                    ..DraftPatch::default()
                },
            )
            .unwrap();
        assert!(updated.updated_at >= first.updated_at);

        // The edited draft now sorts to the front.
        let listed = repo.list(&user);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[0].content, "edited");
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.create(&user, DraftParams::default());
        assert!(repo.update(&user, "missing", DraftPatch::default()).is_none());
    }

    #[test]
    fn remove_then_list_no_longer_contains_the_draft() {
        let repo = repo();
        let user = UserId::new("u_test");
        let draft = repo.create(
            &user,
            DraftParams {
                kind: Some(DraftKind::Task),
                title: Some("Buy milk".to_string()),
                ..DraftParams::default()
            },
        );

        let remaining = repo.remove(&user, &draft.id);
        assert!(remaining.is_empty());
        assert!(repo.list(&user).iter().all(|d| d.id != draft.id));
    }
}
