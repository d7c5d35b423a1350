//! JSON file snapshot store.
//!
//! One pretty-printed JSON document in a capability-scoped directory. Saves
//! go through a sibling temp file and a rename, so an interrupted write can
//! never leave a truncated blob behind.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::storage::domain::WorkspaceSnapshot;
use crate::storage::ports::{SnapshotStore, SnapshotStoreResult};

/// Snapshot store writing a single JSON document inside one directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: Dir,
    file_name: String,
}

impl JsonFileStore {
    /// Opens a store rooted at an existing directory.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Io`](crate::storage::ports::SnapshotStoreError::Io)
    /// when the directory cannot be
    /// opened.
    pub fn open(root: &Utf8Path, file_name: impl Into<String>) -> SnapshotStoreResult<Self> {
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
        })
    }

    fn temp_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> SnapshotStoreResult<Option<WorkspaceSnapshot>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, snapshot: &WorkspaceSnapshot) -> SnapshotStoreResult<()> {
        let payload = serde_json::to_string_pretty(snapshot)?;
        let temp_name = self.temp_name();
        self.dir.write(&temp_name, payload.as_bytes())?;
        self.dir.rename(&temp_name, &self.dir, &self.file_name)?;
        tracing::debug!(file = %self.file_name, bytes = payload.len(), "snapshot saved");
        Ok(())
    }
}
