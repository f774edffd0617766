//! In-memory mailbox with folders and sample data.
//!
//! Unlike every other feature, emails are never persisted: the mailbox is a
//! mock that lives and dies with the session. "Deleting" a message moves it
//! to the Trash folder rather than removing it.

mod model;
mod sample;
mod store;

pub use model::{Address, Email, Folder, FolderKind, OutgoingEmail};
pub use sample::{default_folders, sample_emails};
pub use store::Mailbox;
