//! # maildesk-store
//!
//! Namespaced key-value collection storage for the `MailDesk` suite.
//!
//! This crate provides:
//! - Deterministic key building from (namespace, app id, user id, collection)
//! - A raw string-blob storage backend (file-backed or in-memory)
//! - A typed collection accessor with empty-default degradation
//! - Identifier and timestamp utilities
//!
//! Every collection is persisted as a single JSON array under one composed
//! key, and every mutation rewrites the whole blob. The accessor never
//! surfaces storage failures to its callers: missing, unreadable, or
//! malformed data loads as an empty collection, and failed writes are
//! logged and swallowed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod backend;
mod collection;
mod error;
pub mod id;
mod key;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collection::CollectionStore;
pub use error::{Error, Result};
pub use id::{new_id, now_millis, to_datetime};
pub use key::{KeyBuilder, UserId};
