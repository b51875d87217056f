//! Application services for the ordered task list.

mod ordering;

pub use ordering::{TaskOrderingError, TaskOrderingResult, TaskOrderingService};
