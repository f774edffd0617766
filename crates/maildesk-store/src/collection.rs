//! Typed collection access over a raw storage backend.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::key::{KeyBuilder, UserId};
use crate::Result;

/// Loads and saves whole collections as JSON blobs.
///
/// Each (user, collection) pair maps to one backend key holding a single
/// JSON array; `save` rewrites that blob in one backend write, and `load`
/// degrades to an empty collection on any failure. Cloning is cheap: clones
/// share the same backend.
///
/// Two stores opened on the same directory behave like two browser tabs on
/// one origin: the later save fully overwrites the earlier one, with no
/// merge and no staleness check. That last-write-wins policy is deliberate
/// and matches the record-count scale this store is built for.
#[derive(Clone)]
pub struct CollectionStore {
    backend: Arc<dyn StorageBackend>,
    keys: KeyBuilder,
}

impl CollectionStore {
    /// Create a store over an existing backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, keys: KeyBuilder) -> Self {
        Self { backend, keys }
    }

    /// Open a file-backed store in the platform data directory
    /// (`<data_dir>/maildesk`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform exposes no data directory or the
    /// directory cannot be created.
    pub fn open(keys: KeyBuilder) -> Result<Self> {
        Ok(Self::new(Arc::new(FileBackend::in_data_dir("maildesk")?), keys))
    }

    /// Open a file-backed store rooted at an explicit directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open_at(root: impl Into<PathBuf>, keys: KeyBuilder) -> Result<Self> {
        Ok(Self::new(Arc::new(FileBackend::new(root)?), keys))
    }

    /// Create an in-memory store for testing or ephemeral sessions.
    #[must_use]
    pub fn in_memory(keys: KeyBuilder) -> Self {
        Self::new(Arc::new(MemoryBackend::new()), keys)
    }

    /// Load a user's collection.
    ///
    /// Never fails: an absent key, an unreadable backend, or a malformed
    /// blob all yield an empty vector. Malformed content is logged; it will
    /// be overwritten wholesale by the next save.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, user: &UserId, collection: &str) -> Vec<T> {
        let key = self.keys.collection_key(user, collection);
        let raw = match self.backend.read(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read collection {collection}: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Malformed blob under {key}, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Save a user's collection, replacing any prior value.
    ///
    /// The whole sequence is serialized and written in a single backend
    /// call. Failures (e.g. storage full or read-only) are logged and
    /// swallowed; they never reach the caller.
    pub fn save<T: Serialize>(&self, user: &UserId, collection: &str, records: &[T]) {
        let blob = match serde_json::to_string(records) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize collection {collection}: {e}");
                return;
            }
        };
        let key = self.keys.collection_key(user, collection);
        if let Err(e) = self.backend.write(&key, &blob) {
            warn!("Failed to write collection {collection}: {e}");
        }
    }

    /// Load a singleton value (e.g. settings) stored as one JSON object.
    ///
    /// Returns `None` when absent or malformed, never an error.
    #[must_use]
    pub fn load_value<T: DeserializeOwned>(&self, user: &UserId, collection: &str) -> Option<T> {
        let key = self.keys.collection_key(user, collection);
        let raw = match self.backend.read(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read {collection}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Malformed blob under {key}, ignoring: {e}");
                None
            }
        }
    }

    /// Save a singleton value, replacing any prior object wholesale.
    pub fn save_value<T: Serialize>(&self, user: &UserId, collection: &str, value: &T) {
        let blob = match serde_json::to_string(value) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize {collection}: {e}");
                return;
            }
        };
        let key = self.keys.collection_key(user, collection);
        if let Err(e) = self.backend.write(&key, &blob) {
            warn!("Failed to write {collection}: {e}");
        }
    }

    /// Remove a user's collection key outright.
    pub fn clear(&self, user: &UserId, collection: &str) {
        let key = self.keys.collection_key(user, collection);
        if let Err(e) = self.backend.remove(&key) {
            warn!("Failed to clear collection {collection}: {e}");
        }
    }

    /// The per-profile user id, if one has been persisted.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self.backend.read(&self.keys.user_id_key()) {
            Ok(raw) => raw.map(UserId::new),
            Err(e) => {
                warn!("Failed to read user id: {e}");
                None
            }
        }
    }

    /// Persist the per-profile user id.
    pub fn set_user_id(&self, user: &UserId) {
        if let Err(e) = self.backend.write(&self.keys.user_id_key(), user.as_str()) {
            warn!("Failed to persist user id: {e}");
        } else {
            debug!("Persisted user id {user}");
        }
    }

    /// The key builder this store was configured with.
    #[must_use]
    pub fn keys(&self) -> &KeyBuilder {
        &self.keys
    }

    /// Raw access to the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }
}
