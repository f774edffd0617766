//! Conversations and messages.

mod model;
mod repository;

pub use model::{Conversation, Message};
pub use repository::ChatRepository;
