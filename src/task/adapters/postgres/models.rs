//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Insertion sequence.
    pub seq: i64,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Optional sort key.
    pub sort_order: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records. `seq` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Optional sort key.
    pub sort_order: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a single task row; `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New completion flag.
    pub is_completed: Option<bool>,
    /// New sort key.
    pub sort_order: Option<i64>,
}
