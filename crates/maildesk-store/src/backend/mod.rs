//! Raw string-blob storage backends.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::Result;

/// A flat key-value store of string blobs.
///
/// This is the only surface the collection layer touches: get, set, and
/// remove of whole values under string keys. Implementations must be safe to
/// share across threads, but the store itself assumes a single logical
/// writer per process; two independent processes sharing one backend get
/// last-write-wins with no merge.
pub trait StorageBackend: Send + Sync {
    /// Return the blob previously stored under `key`, or `None` if the key
    /// has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value in a single
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written, e.g.
    /// the medium is full or read-only.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` outright. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be modified.
    fn remove(&self, key: &str) -> Result<()>;
}
