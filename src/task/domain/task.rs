//! Task aggregate root and single-document patches.

use super::{OrderKey, TaskId, TaskText};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A single todo item with text, completion flag, and sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    is_completed: bool,
    order: Option<OrderKey>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub text: TaskText,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted order key; absent on legacy records.
    pub order: Option<OrderKey>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    #[must_use]
    pub fn new(text: TaskText, is_completed: bool, order: OrderKey, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            text,
            is_completed,
            order: Some(order),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            is_completed: data.is_completed,
            order: data.order,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the stored order key, if any.
    #[must_use]
    pub const fn order(&self) -> Option<OrderKey> {
        self.order
    }

    /// Returns the order key used for sorting, defaulting an absent key to
    /// [`OrderKey::ZERO`].
    #[must_use]
    pub fn effective_order(&self) -> OrderKey {
        self.order.unwrap_or(OrderKey::ZERO)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a patch in place, leaving unspecified fields untouched.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
    }
}

/// Field-level update applied atomically to one task document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New completion flag.
    pub is_completed: Option<bool>,
    /// New order key.
    pub order: Option<OrderKey>,
}

impl TaskPatch {
    /// Patch that only sets the completion flag.
    #[must_use]
    pub const fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            order: None,
        }
    }

    /// Patch that only sets the order key.
    #[must_use]
    pub const fn order(order: OrderKey) -> Self {
        Self {
            is_completed: None,
            order: Some(order),
        }
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_completed.is_none() && self.order.is_none()
    }
}
