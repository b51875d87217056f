//! Service layer maintaining the ordered task list.

use crate::task::{
    domain::{OrderKey, StatusFilter, Task, TaskDomainError, TaskId, TaskPatch, TaskText},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Service-level errors for task ordering operations.
#[derive(Debug, Error)]
pub enum TaskOrderingError {
    /// Caller input failed validation.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A task with the generated identifier already exists.
    #[error("duplicate task identifier: {0}")]
    Duplicate(TaskId),

    /// The document store failed to respond.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(#[source] TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskOrderingError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Duplicate(id) => Self::Duplicate(id),
            TaskRepositoryError::Persistence(_) => Self::StoreUnavailable(err),
        }
    }
}

/// Result type for task ordering service operations.
pub type TaskOrderingResult<T> = Result<T, TaskOrderingError>;

/// Ordered task list store.
///
/// Every operation is a sequence of independent single-document requests
/// against the repository. No operation is transactional across documents.
pub struct TaskOrderingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskOrderingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskOrderingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task ordering service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists tasks matching the filter, ascending by order key.
    ///
    /// Tasks without a key sort as `0`. Equal keys keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::StoreUnavailable`] when the scan fails.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: StatusFilter) -> TaskOrderingResult<Vec<Task>> {
        let mut tasks = self.repository.scan(filter).await?;
        tasks.sort_by_key(Task::effective_order);
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Creates an active task placed after every existing task.
    ///
    /// # Errors
    ///
    /// See [`Self::create_with_status`].
    #[instrument(skip(self, text))]
    pub async fn create(&self, text: impl Into<String>) -> TaskOrderingResult<Task> {
        self.create_with_status(text, false).await
    }

    /// Creates a task with an explicit completion flag.
    ///
    /// The new order key is one more than the highest key currently stored
    /// (absent keys count as `0`). The scan and the insert are separate
    /// requests, so concurrent creates may share a key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::InvalidInput`] for blank text and
    /// [`TaskOrderingError::StoreUnavailable`] when persistence fails.
    #[instrument(skip(self, text))]
    pub async fn create_with_status(
        &self,
        text: impl Into<String>,
        is_completed: bool,
    ) -> TaskOrderingResult<Task> {
        let task_text = TaskText::new(text)?;
        let existing = self.repository.scan(StatusFilter::All).await?;
        let current_max = existing
            .iter()
            .map(Task::effective_order)
            .fold(OrderKey::ZERO, Ord::max);

        let task = Task::new(task_text, is_completed, current_max.next(), &*self.clock);
        self.repository.insert(&task).await?;
        info!(task_id = %task.id(), order = %task.effective_order(), "created task");
        Ok(task)
    }

    /// Sets the completion flag, leaving text and order untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::NotFound`] when the task does not exist.
    #[instrument(skip(self))]
    pub async fn set_completion(
        &self,
        id: TaskId,
        is_completed: bool,
    ) -> TaskOrderingResult<Task> {
        let task = self
            .repository
            .patch(id, &TaskPatch::completion(is_completed))
            .await?;
        info!(task_id = %id, is_completed, "updated task completion");
        Ok(task)
    }

    /// Flips the completion flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::NotFound`] when the task does not exist.
    #[instrument(skip(self))]
    pub async fn toggle_completion(&self, id: TaskId) -> TaskOrderingResult<Task> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskOrderingError::NotFound(id))?;
        self.set_completion(id, !current.is_completed()).await
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::NotFound`] when the task does not exist,
    /// including when it was already deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskOrderingResult<()> {
        self.repository.delete(id).await?;
        info!("deleted task");
        Ok(())
    }

    /// Assigns order keys `0..n-1` following the given sequence.
    ///
    /// Each task is patched independently in sequence order. Duplicate ids
    /// end up with their last position, and tasks absent from the sequence
    /// keep their keys.
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::NotFound`] at the first unknown id. Patches
    /// applied before the failure are not rolled back.
    #[instrument(skip(self, ordered_ids), fields(count = ordered_ids.len()))]
    pub async fn reorder(&self, ordered_ids: &[TaskId]) -> TaskOrderingResult<()> {
        for (position, id) in ordered_ids.iter().enumerate() {
            let order = OrderKey::from_position(position);
            if let Err(err) = self.repository.patch(*id, &TaskPatch::order(order)).await {
                warn!(
                    task_id = %id,
                    applied = position,
                    requested = ordered_ids.len(),
                    error = %err,
                    "reorder stopped part way; earlier positions were kept"
                );
                return Err(err.into());
            }
        }
        info!(count = ordered_ids.len(), "reordered tasks");
        Ok(())
    }

    /// Moves a task within a filtered view and persists the new order.
    ///
    /// The task at `from_index` of the view is reinserted at `to_index`
    /// (clamped to the last position). Tasks outside the view keep their
    /// positions in the full list; the view's tasks fill the slots the view
    /// already occupied. The merged full sequence is then passed to
    /// [`Self::reorder`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskOrderingError::InvalidInput`] when `from_index` is out of
    /// range, plus the errors of [`Self::reorder`].
    #[instrument(skip(self))]
    pub async fn move_task(
        &self,
        filter: StatusFilter,
        from_index: usize,
        to_index: usize,
    ) -> TaskOrderingResult<()> {
        let full = self.list(StatusFilter::All).await?;
        let mut view: Vec<TaskId> = full
            .iter()
            .filter(|task| filter.matches(task.is_completed()))
            .map(Task::id)
            .collect();

        if from_index >= view.len() {
            return Err(TaskDomainError::IndexOutOfRange {
                index: from_index,
                len: view.len(),
            }
            .into());
        }
        let target = to_index.min(view.len().saturating_sub(1));
        if target == from_index {
            debug!(from_index, "move is a no-op");
            return Ok(());
        }

        let moved = view.remove(from_index);
        view.insert(target, moved);
        debug!(task_id = %moved, %filter, from_index, to_index = target, "moving task");

        let sequence = merge_view_order(&full, filter, view);
        self.reorder(&sequence).await
    }
}

/// Rebuilds the full id sequence with the view's slots taken, in order, from
/// `view_order`.
fn merge_view_order(full: &[Task], filter: StatusFilter, view_order: Vec<TaskId>) -> Vec<TaskId> {
    let mut reordered = view_order.into_iter();
    full.iter()
        .filter_map(|task| {
            if filter.matches(task.is_completed()) {
                reordered.next()
            } else {
                Some(task.id())
            }
        })
        .collect()
}
