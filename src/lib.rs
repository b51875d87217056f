//! Tasklist: ordered todo list maintenance over a document store.
//!
//! Users create, complete, delete, filter, and manually reorder short text
//! tasks. Persistence is delegated to a task document collection reached
//! through a repository port.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task ordering domain, ports, adapters, and services
//! - [`config`]: Store configuration loaded from the environment

pub mod config;
pub mod task;
