//! Workspace persistence orchestration: hydrate at startup, checkpoint
//! after every change.

use crate::directory::ports::{
    CustomerRepository, DirectoryRepositoryError, StaffRepository, TemplateRepository,
};
use crate::job::ports::{JobRepository, JobRepositoryError};
use crate::storage::{
    domain::{SnapshotError, WorkspaceSnapshot},
    ports::{SnapshotStore, SnapshotStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by workspace persistence operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The snapshot store failed.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),

    /// A loaded snapshot failed validation.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A directory repository rejected a hydrated record.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// The job repository rejected a hydrated record.
    #[error(transparent)]
    Jobs(#[from] JobRepositoryError),
}

/// Result type for workspace persistence operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Moves whole-workspace snapshots between the store and the in-memory
/// repositories.
///
/// The persistence model mirrors the original tool: the entire state is
/// one blob, loaded once at startup ([`Self::hydrate`]) and rewritten in
/// full after each mutation round ([`Self::checkpoint`]).
#[derive(Clone)]
pub struct WorkspaceService<D, J, S>
where
    D: CustomerRepository + StaffRepository + TemplateRepository,
    J: JobRepository,
    S: SnapshotStore,
{
    directory: Arc<D>,
    jobs: Arc<J>,
    store: Arc<S>,
}

impl<D, J, S> WorkspaceService<D, J, S>
where
    D: CustomerRepository + StaffRepository + TemplateRepository,
    J: JobRepository,
    S: SnapshotStore,
{
    /// Creates a new workspace service.
    #[must_use]
    pub const fn new(directory: Arc<D>, jobs: Arc<J>, store: Arc<S>) -> Self {
        Self {
            directory,
            jobs,
            store,
        }
    }

    /// Loads the stored snapshot into the repositories.
    ///
    /// The snapshot is validated before any record is stored, so a corrupt
    /// or dangling blob is refused without partially populating the stores.
    /// Returns `false` when no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError`] when loading, validation, or repository
    /// insertion fails.
    pub async fn hydrate(&self) -> WorkspaceResult<bool> {
        let Some(snapshot) = self.store.load().await? else {
            tracing::info!("no snapshot found, starting empty");
            return Ok(false);
        };
        snapshot.validate()?;

        for customer in snapshot.customers() {
            self.directory.store_customer(customer).await?;
        }
        for member in snapshot.staff() {
            self.directory.store_staff(member).await?;
        }
        for template in snapshot.templates() {
            self.directory.store_template(template).await?;
        }
        for job in snapshot.jobs() {
            self.jobs.store(job).await?;
        }
        tracing::info!(
            customers = snapshot.customers().len(),
            staff = snapshot.staff().len(),
            templates = snapshot.templates().len(),
            jobs = snapshot.jobs().len(),
            "workspace hydrated"
        );
        Ok(true)
    }

    /// Writes the current repository contents to the store as one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError`] when collection or saving fails.
    pub async fn checkpoint(&self) -> WorkspaceResult<WorkspaceSnapshot> {
        let snapshot = WorkspaceSnapshot::new(
            self.directory.list_customers().await?,
            self.directory.list_staff().await?,
            self.directory.list_templates().await?,
            self.jobs.list().await?,
        );
        self.store.save(&snapshot).await?;
        Ok(snapshot)
    }
}
