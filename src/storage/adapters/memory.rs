//! In-memory snapshot store for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::storage::domain::WorkspaceSnapshot;
use crate::storage::ports::{SnapshotStore, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<RwLock<Option<WorkspaceSnapshot>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot.
    #[must_use]
    pub fn seeded(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(snapshot))),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<WorkspaceSnapshot>> {
        let slot = self
            .slot
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        Ok(slot.clone())
    }

    async fn save(&self, snapshot: &WorkspaceSnapshot) -> SnapshotStoreResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}
