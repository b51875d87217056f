//! Ordered task list maintenance.
//!
//! Stores a linearly ordered collection of todo tasks, filters it by
//! completion status, and resequences it under insert, delete, and reorder
//! operations. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
