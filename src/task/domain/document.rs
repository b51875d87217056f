//! Persisted document shape shared with existing task collections.
//!
//! Records look like `{ "id", "text", "isCompleted", "order"? }`. Legacy
//! records may omit `order` (read as `0`) and `createdAt`.

use super::{OrderKey, PersistedTaskData, Task, TaskDomainError, TaskId, TaskText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of a task document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    /// Document identifier.
    pub id: TaskId,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Optional sort key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Optional creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Task> for TaskDocument {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            text: task.text().as_str().to_owned(),
            is_completed: task.is_completed(),
            order: task.order().map(OrderKey::value),
            created_at: Some(task.created_at()),
        }
    }
}

impl TryFrom<TaskDocument> for Task {
    type Error = TaskDomainError;

    fn try_from(document: TaskDocument) -> Result<Self, Self::Error> {
        Ok(Self::from_persisted(PersistedTaskData {
            id: document.id,
            text: TaskText::new(document.text)?,
            is_completed: document.is_completed,
            order: document.order.map(OrderKey::new),
            created_at: document.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }))
    }
}
