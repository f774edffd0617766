//! Contact storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Contact, ContactParams, ContactPatch};
use crate::repository::{Record, Repository};

impl Record for Contact {
    const COLLECTION: &'static str = "contacts";

    fn id(&self) -> &str {
        &self.id
    }

    // Alphabetical by name, case-insensitive.
    fn sort(records: &mut [Self]) {
        records.sort_by_key(|c| c.name.to_lowercase());
    }
}

/// Repository for contact storage and retrieval.
pub struct ContactRepository {
    repo: Repository<Contact>,
}

impl ContactRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Add a contact and persist it.
    pub fn create(&self, user: &UserId, params: ContactParams) -> Contact {
        self.repo.insert(user, Contact::from_params(params))
    }

    /// Shallow-merge `patch` into the contact with `id`; `None` if not
    /// found.
    pub fn update(&self, user: &UserId, id: &str, patch: ContactPatch) -> Option<Contact> {
        self.repo.update_with(user, id, |contact| patch.apply(contact))
    }

    /// Delete the contact with `id`; returns the remaining contacts.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Contact> {
        self.repo.remove(user, id)
    }

    /// All contacts, alphabetically by name.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Contact> {
        self.repo.list(user)
    }

    /// Contacts where name, email, or company contains `query`,
    /// case-insensitively, in alphabetical order.
    #[must_use]
    pub fn search(&self, user: &UserId, query: &str) -> Vec<Contact> {
        let mut contacts = self.list(user);
        contacts.retain(|c| c.matches(query));
        contacts
    }
}
