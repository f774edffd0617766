//! Generic collection repository.

use std::marker::PhantomData;

use maildesk_store::{CollectionStore, UserId, now_millis};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A record that lives in one named collection.
///
/// Implemented once per feature; the trait carries the collection name, the
/// identity accessor, and the feature's canonical ordering.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection name under which records of this type are persisted.
    const COLLECTION: &'static str;

    /// The record's unique identifier.
    ///
    /// Uniqueness is intended, not enforced: the store never de-duplicates,
    /// and a duplicate id would shadow the earlier record in lookups.
    fn id(&self) -> &str;

    /// Apply the feature's canonical ordering, as returned by
    /// [`Repository::list`].
    fn sort(records: &mut [Self]);

    /// Refresh the record's update timestamp, if it carries one.
    ///
    /// Called on every successful update. The default is a no-op for
    /// records whose timestamps are set once at creation.
    fn touch(&mut self, _now_ms: i64) {}
}

/// Create/update/remove/list over one collection.
///
/// Every mutation is a full read-modify-write: load the whole collection,
/// transform it in memory, persist the whole collection in one write. That
/// is O(N) per mutation, which is the right trade at UI record counts and
/// keeps the persisted blob identical in shape to what a single
/// overwrite-the-array store expects. Missing or corrupt backing data is
/// treated as an empty collection, never as an error.
pub struct Repository<R> {
    store: CollectionStore,
    _record: PhantomData<R>,
}

impl<R: Record> Repository<R> {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// All records for `user`, in the feature's canonical order.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<R> {
        let mut records: Vec<R> = self.store.load(user, R::COLLECTION);
        R::sort(&mut records);
        records
    }

    /// Prepend `record` to the collection and persist it.
    ///
    /// Returns the stored record.
    pub fn insert(&self, user: &UserId, record: R) -> R {
        let mut records: Vec<R> = self.store.load(user, R::COLLECTION);
        records.insert(0, record.clone());
        self.store.save(user, R::COLLECTION, &records);
        debug!("Inserted record {} into {}", record.id(), R::COLLECTION);
        record
    }

    /// Mutate the record with `id` in place, refresh its update timestamp,
    /// and persist the whole collection.
    ///
    /// Returns the updated record, or `None` if no record matched `id` (in
    /// which case nothing is written). Only the matched record is touched;
    /// every other record round-trips unchanged.
    pub fn update_with<F>(&self, user: &UserId, id: &str, apply: F) -> Option<R>
    where
        F: FnOnce(&mut R),
    {
        let mut records: Vec<R> = self.store.load(user, R::COLLECTION);
        let record = records.iter_mut().find(|r| r.id() == id)?;
        apply(record);
        record.touch(now_millis());
        let updated = record.clone();
        self.store.save(user, R::COLLECTION, &records);
        Some(updated)
    }

    /// Mutate every record and persist the collection.
    ///
    /// Returns the records in canonical order.
    pub fn update_all<F>(&self, user: &UserId, mut apply: F) -> Vec<R>
    where
        F: FnMut(&mut R),
    {
        let mut records: Vec<R> = self.store.load(user, R::COLLECTION);
        for record in &mut records {
            apply(record);
        }
        self.store.save(user, R::COLLECTION, &records);
        R::sort(&mut records);
        records
    }

    /// Remove the record with `id`, persist what remains, and return it in
    /// canonical order.
    ///
    /// Removing an id that is not present is a no-op that returns the
    /// collection unchanged.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<R> {
        let mut records: Vec<R> = self.store.load(user, R::COLLECTION);
        records.retain(|r| r.id() != id);
        self.store.save(user, R::COLLECTION, &records);
        debug!("Removed record {id} from {}", R::COLLECTION);
        R::sort(&mut records);
        records
    }

    /// Persist an empty collection, discarding every record.
    pub fn clear(&self, user: &UserId) {
        self.store.save::<R>(user, R::COLLECTION, &[]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use maildesk_store::KeyBuilder;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        label: String,
        updated_at: i64,
    }

    impl Record for Widget {
        const COLLECTION: &'static str = "widgets";

        fn id(&self) -> &str {
            &self.id
        }

        fn sort(records: &mut [Self]) {
            records.sort_by_key(|w| std::cmp::Reverse(w.updated_at));
        }

        fn touch(&mut self, now_ms: i64) {
            self.updated_at = now_ms;
        }
    }

    fn repo() -> Repository<Widget> {
        Repository::new(CollectionStore::in_memory(KeyBuilder::new(
            "maildesk", "test-app",
        )))
    }

    fn widget(id: &str, label: &str, updated_at: i64) -> Widget {
        Widget {
            id: id.to_string(),
            label: label.to_string(),
            updated_at,
        }
    }

    #[test]
    fn list_applies_canonical_order() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "old", 1));
        repo.insert(&user, widget("b", "new", 3));
        repo.insert(&user, widget("c", "mid", 2));

        let listed = repo.list(&user);
        assert_eq!(
            listed.iter().map(|w| w.id.as_str()).collect::<Vec<_>>(),
            ["b", "c", "a"]
        );
    }

    #[test]
    fn update_with_touches_only_the_target() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "alpha", 1));
        repo.insert(&user, widget("b", "beta", 2));

        let updated = repo
            .update_with(&user, "a", |w| w.label = "ALPHA".to_string())
            .unwrap();
        assert_eq!(updated.label, "ALPHA");
        assert!(updated.updated_at > 1);

        let other = repo
            .list(&user)
            .into_iter()
            .find(|w| w.id == "b")
            .unwrap();
        assert_eq!(other.label, "beta");
        assert_eq!(other.updated_at, 2);
    }

    #[test]
    fn update_missing_id_is_a_sentinel_not_an_error() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "alpha", 1));
        assert!(repo.update_with(&user, "ghost", |w| w.label.clear()).is_none());
        assert_eq!(repo.list(&user).len(), 1);
    }

    #[test]
    fn remove_missing_id_leaves_collection_unchanged() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "alpha", 1));
        repo.insert(&user, widget("b", "beta", 2));

        let remaining = repo.remove(&user, "ghost");
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn remove_persists_the_remainder() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "alpha", 1));
        repo.insert(&user, widget("b", "beta", 2));

        let remaining = repo.remove(&user, "a");
        assert_eq!(remaining.len(), 1);
        assert_eq!(repo.list(&user).len(), 1);
        assert_eq!(repo.list(&user)[0].id, "b");
    }

    #[test]
    fn clear_empties_the_collection() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "alpha", 1));
        repo.clear(&user);
        assert!(repo.list(&user).is_empty());
    }

    #[test]
    fn update_all_mutates_every_record() {
        let repo = repo();
        let user = UserId::new("u_test");
        repo.insert(&user, widget("a", "x", 1));
        repo.insert(&user, widget("b", "x", 2));

        let all = repo.update_all(&user, |w| w.label = "y".to_string());
        assert!(all.iter().all(|w| w.label == "y"));
        assert!(repo.list(&user).iter().all(|w| w.label == "y"));
    }
}
