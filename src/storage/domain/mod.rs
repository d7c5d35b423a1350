//! Domain model for workspace snapshots.

mod snapshot;

pub use snapshot::{SnapshotError, WorkspaceSnapshot, SNAPSHOT_VERSION};
