//! Unit tests for the ordered task list.
