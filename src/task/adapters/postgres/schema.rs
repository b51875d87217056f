//! Diesel schema for task list persistence.

diesel::table! {
    /// Task documents.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Insertion sequence defining scan order.
        seq -> Int8,
        /// Task text.
        text -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Optional sort key; `NULL` on legacy rows.
        sort_order -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
