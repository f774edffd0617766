//! Note storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Note, NoteParams, NotePatch};
use crate::repository::{Record, Repository};

impl Record for Note {
    const COLLECTION: &'static str = "notes";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|n| std::cmp::Reverse(n.updated_at));
    }

    fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms;
    }
}

/// Repository for note storage and retrieval.
pub struct NoteRepository {
    repo: Repository<Note>,
}

impl NoteRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Create a note and persist it.
    pub fn create(&self, user: &UserId, params: NoteParams) -> Note {
        self.repo.insert(user, Note::from_params(params))
    }

    /// Shallow-merge `patch` into the note with `id` and refresh its update
    /// timestamp; `None` if not found.
    pub fn update(&self, user: &UserId, id: &str, patch: NotePatch) -> Option<Note> {
        self.repo.update_with(user, id, |note| patch.apply(note))
    }

    /// Change just the display color; `None` if not found.
    pub fn set_color(&self, user: &UserId, id: &str, color: impl Into<String>) -> Option<Note> {
        let color = color.into();
        self.repo.update_with(user, id, |note| note.color = color)
    }

    /// Delete the note with `id`; returns the remaining notes.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Note> {
        self.repo.remove(user, id)
    }

    /// All notes, most recently edited first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Note> {
        self.repo.list(user)
    }

    /// Notes whose title or content contains `query`, case-insensitively,
    /// in canonical order. An empty query matches everything.
    #[must_use]
    pub fn search(&self, user: &UserId, query: &str) -> Vec<Note> {
        let mut notes = self.list(user);
        notes.retain(|n| n.matches(query));
        notes
    }
}
