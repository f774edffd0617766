//! Chat storage repository.

use maildesk_store::{CollectionStore, UserId, now_millis};
use tracing::debug;

use super::model::{Conversation, Message};
use crate::repository::{Record, Repository};

impl Record for Conversation {
    const COLLECTION: &'static str = "conversations";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|c| std::cmp::Reverse(c.updated_at));
    }
}

/// Repository for conversations and their messages.
///
/// Conversations live in one shared collection; each conversation's
/// messages live in their own sub-scoped collection
/// (`messages::<conversation-id>`), appended in arrival order and returned
/// without re-sorting.
pub struct ChatRepository {
    conversations: Repository<Conversation>,
    store: CollectionStore,
}

impl ChatRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            conversations: Repository::new(store.clone()),
            store,
        }
    }

    fn messages_collection(conversation_id: &str) -> String {
        format!("messages::{conversation_id}")
    }

    /// Start a new conversation and persist it.
    pub fn create_conversation(&self, user: &UserId, title: impl Into<String>) -> Conversation {
        self.conversations.insert(user, Conversation::new(title))
    }

    /// All conversations, most recently active first.
    #[must_use]
    pub fn conversations(&self, user: &UserId) -> Vec<Conversation> {
        self.conversations.list(user)
    }

    /// All messages in a conversation, in arrival order.
    #[must_use]
    pub fn messages(&self, user: &UserId, conversation_id: &str) -> Vec<Message> {
        self.store
            .load(user, &Self::messages_collection(conversation_id))
    }

    /// Append a message to a conversation and bump the conversation's
    /// activity timestamp.
    ///
    /// The message is stored even if no conversation with that id exists;
    /// the parent reference is by id only.
    pub fn add_message(
        &self,
        user: &UserId,
        conversation_id: &str,
        from: impl Into<String>,
        text: impl Into<String>,
    ) -> Message {
        let message = Message::new(conversation_id, from, text);
        let collection = Self::messages_collection(conversation_id);
        let mut messages = self.messages(user, conversation_id);
        messages.push(message.clone());
        self.store.save(user, &collection, &messages);

        let now = now_millis();
        self.conversations
            .update_with(user, conversation_id, |c| c.updated_at = now);

        debug!("Added message {} to conversation {conversation_id}", message.id);
        message
    }

    /// Delete a conversation and, explicitly, its message collection.
    ///
    /// The store itself never cascades; this is the one call site that
    /// removes the children along with the parent. Returns the remaining
    /// conversations.
    pub fn remove_conversation(&self, user: &UserId, conversation_id: &str) -> Vec<Conversation> {
        self.store
            .clear(user, &Self::messages_collection(conversation_id));
        self.conversations.remove(user, conversation_id)
    }
}
