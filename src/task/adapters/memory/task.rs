//! In-memory task document collection for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{StatusFilter, Task, TaskDocument, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Scans return documents in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskState {
    fn push(&mut self, task: Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        if self.tasks.contains_key(&id) {
            return Err(TaskRepositoryError::Duplicate(id));
        }
        self.insertion_order.push(id);
        self.tasks.insert(id, task);
        Ok(())
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded from existing task documents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when a document holds
    /// blank text, or [`TaskRepositoryError::Duplicate`] when two documents
    /// share an identifier.
    pub fn from_documents(
        documents: impl IntoIterator<Item = TaskDocument>,
    ) -> TaskRepositoryResult<Self> {
        let mut state = InMemoryTaskState::default();
        for document in documents {
            let task = Task::try_from(document).map_err(TaskRepositoryError::persistence)?;
            state.push(task)?;
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Creates a repository seeded from a JSON array of task documents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the JSON cannot be
    /// decoded, plus the errors of [`Self::from_documents`].
    pub fn from_json(json: &str) -> TaskRepositoryResult<Self> {
        let documents: Vec<TaskDocument> =
            serde_json::from_str(json).map_err(TaskRepositoryError::persistence)?;
        Self::from_documents(documents)
    }

    /// Returns every stored document in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn documents(&self) -> TaskRepositoryResult<Vec<TaskDocument>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .map(TaskDocument::from)
            .collect())
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state.push(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn scan(&self, filter: StatusFilter) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| filter.matches(task.is_completed()))
            .cloned()
            .collect())
    }

    async fn patch(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        state.insertion_order.retain(|existing| *existing != id);
        Ok(())
    }
}
