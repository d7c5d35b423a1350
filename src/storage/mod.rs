//! Whole-workspace snapshot persistence.
//!
//! The original tool serialises the entire application state to client-side
//! storage on every change. The same shape is kept here: one versioned
//! snapshot bundling every record, written through a [`ports::SnapshotStore`]
//! after each mutation round and reloaded at startup.
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
