//! Domain model for the ordered task list.
//!
//! Tasks carry text, a completion flag, and an optional numeric order key.
//! All infrastructure concerns stay outside of the domain boundary.

mod document;
mod error;
mod filter;
mod ids;
mod task;

pub use document::TaskDocument;
pub use error::{ParseStatusFilterError, TaskDomainError};
pub use filter::StatusFilter;
pub use ids::{OrderKey, TaskId, TaskText};
pub use task::{PersistedTaskData, Task, TaskPatch};
