//! Versioned snapshot of every record in the workspace.

use crate::directory::domain::{Customer, ServiceTemplate, StaffMember};
use crate::job::domain::{Job, JobId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors found while validating a loaded snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was written by an unknown schema version.
    #[error("unsupported snapshot version {0}, expected {SNAPSHOT_VERSION}")]
    UnsupportedVersion(u32),

    /// Two records of the same kind share an identifier.
    #[error("duplicate {kind} identifier in snapshot: {id}")]
    DuplicateId {
        /// Record kind label ("customer", "staff", "template", "job").
        kind: &'static str,
        /// The repeated identifier.
        id: Uuid,
    },

    /// A job references a record the snapshot does not contain.
    #[error("job {job} references missing {kind}: {id}")]
    DanglingReference {
        /// Job holding the reference.
        job: JobId,
        /// Record kind label ("customer", "staff", "template").
        kind: &'static str,
        /// The unresolved identifier.
        id: Uuid,
    },
}

/// Everything the back office knows, in one serialisable blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    version: u32,
    customers: Vec<Customer>,
    staff: Vec<StaffMember>,
    templates: Vec<ServiceTemplate>,
    jobs: Vec<Job>,
}

impl WorkspaceSnapshot {
    /// Bundles the given records under the current schema version.
    #[must_use]
    pub fn new(
        customers: Vec<Customer>,
        staff: Vec<StaffMember>,
        templates: Vec<ServiceTemplate>,
        jobs: Vec<Job>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            customers,
            staff,
            templates,
            jobs,
        }
    }

    /// Returns the schema version the snapshot was written with.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the customer records.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns the staff records.
    #[must_use]
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Returns the template records.
    #[must_use]
    pub fn templates(&self) -> &[ServiceTemplate] {
        &self.templates
    }

    /// Returns the job records.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Checks the snapshot for version, id-uniqueness, and referential
    /// integrity problems.
    ///
    /// A snapshot passing this check hydrates into the in-memory stores
    /// without errors; one failing it is refused wholesale rather than
    /// partially loaded.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnapshotError`] found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }

        let customers = unique_ids(
            "customer",
            self.customers.iter().map(|c| c.id().into_inner()),
        )?;
        let staff = unique_ids("staff", self.staff.iter().map(|s| s.id().into_inner()))?;
        let templates = unique_ids(
            "template",
            self.templates.iter().map(|t| t.id().into_inner()),
        )?;
        let _ = unique_ids("job", self.jobs.iter().map(|j| j.id().into_inner()))?;

        for job in &self.jobs {
            if !customers.contains(&job.customer_id().into_inner()) {
                return Err(SnapshotError::DanglingReference {
                    job: job.id(),
                    kind: "customer",
                    id: job.customer_id().into_inner(),
                });
            }
            if !templates.contains(&job.template_id().into_inner()) {
                return Err(SnapshotError::DanglingReference {
                    job: job.id(),
                    kind: "template",
                    id: job.template_id().into_inner(),
                });
            }
            for assignee in job.assignees() {
                if !staff.contains(&assignee.into_inner()) {
                    return Err(SnapshotError::DanglingReference {
                        job: job.id(),
                        kind: "staff",
                        id: assignee.into_inner(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Collects identifiers into a set, failing on the first repeat.
fn unique_ids(
    kind: &'static str,
    ids: impl Iterator<Item = Uuid>,
) -> Result<HashSet<Uuid>, SnapshotError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SnapshotError::DuplicateId { kind, id });
        }
    }
    Ok(seen)
}
