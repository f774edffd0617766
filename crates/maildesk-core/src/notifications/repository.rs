//! Notification storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::Notification;
use crate::repository::{Record, Repository};

impl Record for Notification {
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|n| std::cmp::Reverse(n.created_at));
    }
}

/// Repository for notification storage and retrieval.
pub struct NotificationRepository {
    repo: Repository<Notification>,
}

impl NotificationRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Push a new unread notification.
    pub fn push(&self, user: &UserId, title: impl Into<String>, body: Option<&str>) -> Notification {
        self.repo.insert(user, Notification::new(title, body))
    }

    /// Mark every notification as read; returns the full list.
    pub fn mark_all_read(&self, user: &UserId) -> Vec<Notification> {
        self.repo.update_all(user, |n| n.read = true)
    }

    /// Discard every notification.
    pub fn clear(&self, user: &UserId) {
        self.repo.clear(user);
    }

    /// Delete the notification with `id`; returns the remaining ones.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Notification> {
        self.repo.remove(user, id)
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self, user: &UserId) -> usize {
        self.repo.list(user).iter().filter(|n| !n.read).count()
    }

    /// All notifications, newest first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Notification> {
        self.repo.list(user)
    }
}
