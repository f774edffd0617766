//! Draft storage: emails, tasks and notes in progress.

mod model;
mod repository;

pub use model::{Attachment, Draft, DraftKind, DraftParams, DraftPatch};
pub use repository::DraftRepository;
