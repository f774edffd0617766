//! Task data models.

use maildesk_store::{new_id, now_millis};
use serde::{Deserialize, Serialize};

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
}

impl TaskPriority {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier.
    pub id: String,
    /// What needs doing.
    pub title: String,
    /// Whether it is done.
    #[serde(default)]
    pub completed: bool,
    /// Urgency.
    #[serde(default)]
    pub priority: TaskPriority,
    /// Free-form grouping label.
    #[serde(default)]
    pub category: String,
    /// Creation time, milliseconds since epoch.
    pub created_at: i64,
}

impl Task {
    /// Build a new open task, filling defaults for anything omitted.
    #[must_use]
    pub fn from_params(params: TaskParams) -> Self {
        Self {
            id: new_id(),
            title: params.title.unwrap_or_else(|| "Untitled".to_string()),
            completed: false,
            priority: params.priority.unwrap_or_default(),
            category: params.category.unwrap_or_default(),
            created_at: now_millis(),
        }
    }
}

/// Partial input for creating a task.
#[derive(Debug, Clone, Default)]
pub struct TaskParams {
    /// Title; defaults to "Untitled".
    pub title: Option<String>,
    /// Urgency; defaults to medium.
    pub priority: Option<TaskPriority>,
    /// Grouping label; defaults to empty.
    pub category: Option<String>,
}

/// A shallow merge applied to an existing task.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    /// Replace the title.
    pub title: Option<String>,
    /// Set completion state.
    pub completed: Option<bool>,
    /// Replace the urgency.
    pub priority: Option<TaskPriority>,
    /// Replace the grouping label.
    pub category: Option<String>,
}

impl TaskPatch {
    /// Merge this patch into `task`.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
    }
}
