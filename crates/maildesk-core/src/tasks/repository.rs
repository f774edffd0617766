//! Task storage repository.

use maildesk_store::{CollectionStore, UserId};

use super::model::{Task, TaskParams, TaskPatch};
use crate::repository::{Record, Repository};

impl Record for Task {
    const COLLECTION: &'static str = "tasks";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|t| std::cmp::Reverse(t.created_at));
    }
}

/// Repository for task storage and retrieval.
pub struct TaskRepository {
    repo: Repository<Task>,
}

impl TaskRepository {
    /// Create a repository over the given store.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Create an open task and persist it.
    pub fn create(&self, user: &UserId, params: TaskParams) -> Task {
        self.repo.insert(user, Task::from_params(params))
    }

    /// Shallow-merge `patch` into the task with `id`; `None` if not found.
    pub fn update(&self, user: &UserId, id: &str, patch: TaskPatch) -> Option<Task> {
        self.repo.update_with(user, id, |task| patch.apply(task))
    }

    /// Flip the completion state of the task with `id`; `None` if not
    /// found.
    pub fn toggle(&self, user: &UserId, id: &str) -> Option<Task> {
        self.repo.update_with(user, id, |task| task.completed = !task.completed)
    }

    /// Delete the task with `id`; returns the remaining tasks.
    pub fn remove(&self, user: &UserId, id: &str) -> Vec<Task> {
        self.repo.remove(user, id)
    }

    /// All tasks, newest first.
    #[must_use]
    pub fn list(&self, user: &UserId) -> Vec<Task> {
        self.repo.list(user)
    }

    /// Open tasks only, newest first.
    #[must_use]
    pub fn pending(&self, user: &UserId) -> Vec<Task> {
        let mut tasks = self.list(user);
        tasks.retain(|t| !t.completed);
        tasks
    }

    /// Tasks in `category`, newest first.
    #[must_use]
    pub fn by_category(&self, user: &UserId, category: &str) -> Vec<Task> {
        let mut tasks = self.list(user);
        tasks.retain(|t| t.category == category);
        tasks
    }
}
