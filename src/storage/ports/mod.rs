//! Port contracts for snapshot persistence.

pub mod store;

pub use store::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
