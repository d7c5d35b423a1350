//! Snapshot store port: load at startup, save after every change.

use crate::storage::domain::WorkspaceSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Whole-blob persistence contract.
///
/// The snapshot is always written in full; the store never sees partial
/// updates.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the stored snapshot, returning `None` when nothing has been
    /// saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Malformed`] when stored content cannot
    /// be deserialised, or [`SnapshotStoreError::Io`] on read failure.
    async fn load(&self) -> SnapshotStoreResult<Option<WorkspaceSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`] on write failure.
    async fn save(&self, snapshot: &WorkspaceSnapshot) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    /// Underlying storage failed.
    #[error("snapshot storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content is not a valid snapshot document.
    #[error("malformed snapshot document: {0}")]
    Malformed(#[from] serde_json::Error),
}
