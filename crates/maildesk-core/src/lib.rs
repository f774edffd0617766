//! # maildesk-core
//!
//! Domain models and per-feature repositories for the `MailDesk`
//! productivity suite.
//!
//! This crate provides:
//! - A generic collection [`Repository`] implementing the shared
//!   create/update/remove/list convention
//! - **Right-sidebar features** - drafts, favorites, links, gallery,
//!   notifications, chat conversations and messages
//! - **Workspace features** - notes, tasks, bookmarks, contacts, calendar
//!   events
//! - **Per-user settings** - a persisted singleton replaced wholesale on
//!   change
//! - **Mailbox mock** - an in-memory folder/email model with sample data
//! - **Profile provisioning** - the persisted per-profile user id
//!
//! All persisted state goes through [`maildesk_store::CollectionStore`]:
//! whole-collection JSON blobs, one per (user, collection) pair, rewritten
//! on every mutation. Storage failures never surface here; collections
//! degrade to empty and writes are best-effort.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod bookmarks;
pub mod chat;
pub mod contacts;
pub mod drafts;
pub mod events;
pub mod favorites;
pub mod gallery;
pub mod links;
pub mod mailbox;
pub mod notes;
pub mod notifications;
mod profile;
mod repository;
pub mod settings;
pub mod tasks;

pub use bookmarks::{Bookmark, BookmarkRepository};
pub use chat::{ChatRepository, Conversation, Message};
pub use contacts::{Contact, ContactRepository};
pub use drafts::{Draft, DraftKind, DraftRepository};
pub use events::{Event, EventRepository};
pub use favorites::{Favorite, FavoriteRepository};
pub use gallery::{GalleryItem, GalleryRepository};
pub use links::{Link, LinkRepository};
pub use mailbox::{Address, Email, Folder, FolderKind, Mailbox, OutgoingEmail};
pub use notes::{Note, NoteRepository};
pub use notifications::{Notification, NotificationRepository};
pub use profile::ensure_user_id;
pub use repository::{Record, Repository};
pub use settings::{FontSize, PaneLayout, Settings, SettingsRepository};
pub use tasks::{Task, TaskPriority, TaskRepository};
