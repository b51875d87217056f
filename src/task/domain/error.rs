//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// A position does not address a task in the current view.
    #[error("index {index} is out of range for a view of {len} tasks")]
    IndexOutOfRange {
        /// Requested zero-based index.
        index: usize,
        /// Number of tasks in the view.
        len: usize,
    },
}

/// Error returned while parsing a status filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}, expected all, active or completed")]
pub struct ParseStatusFilterError(pub String);
