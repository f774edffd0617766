//! Error types for the store.

use thiserror::Error;

/// Errors that can occur at the raw storage boundary.
///
/// These are surfaced only by [`crate::StorageBackend`] operations and
/// backend constructors. [`crate::CollectionStore`] catches them internally
/// and degrades to empty defaults instead of propagating.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying storage could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No usable data directory on this platform.
    #[error("no data directory available")]
    NoDataDir,
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
