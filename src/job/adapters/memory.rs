//! In-memory job store backing the single-user workspace.
//!
//! Implements both the job repository and the directory module's
//! job-reference index, so directory delete guards and job persistence stay
//! consistent by construction.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::{CustomerId, ServiceTemplateId, StaffId};
use crate::directory::ports::{JobReferenceError, JobReferenceIndex, JobReferenceResult};
use crate::job::{
    domain::{Job, JobId},
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// Thread-safe in-memory job repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<JobState>>,
}

#[derive(Debug, Default)]
struct JobState {
    jobs: HashMap<JobId, Job>,
    customer_index: HashMap<CustomerId, Vec<JobId>>,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, JobState>, std::io::Error> {
        self.state
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, JobState>, std::io::Error> {
        self.state
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }
}

/// Removes a job ID from a customer index entry, dropping the entry when it
/// empties.
fn remove_from_index(index: &mut HashMap<CustomerId, Vec<JobId>>, job_id: JobId, key: CustomerId) {
    if let Some(ids) = index.get_mut(&key) {
        ids.retain(|id| *id != job_id);
        if ids.is_empty() {
            index.remove(&key);
        }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn store(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.write().map_err(JobRepositoryError::persistence)?;
        if state.jobs.contains_key(&job.id()) {
            return Err(JobRepositoryError::DuplicateJob(job.id()));
        }
        state
            .customer_index
            .entry(job.customer_id())
            .or_default()
            .push(job.id());
        state.jobs.insert(job.id(), job.clone());
        Ok(())
    }

    async fn update(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.write().map_err(JobRepositoryError::persistence)?;
        let old_customer = state
            .jobs
            .get(&job.id())
            .map(Job::customer_id)
            .ok_or(JobRepositoryError::NotFound(job.id()))?;
        if old_customer != job.customer_id() {
            remove_from_index(&mut state.customer_index, job.id(), old_customer);
            state
                .customer_index
                .entry(job.customer_id())
                .or_default()
                .push(job.id());
        }
        state.jobs.insert(job.id(), job.clone());
        Ok(())
    }

    async fn remove(&self, id: JobId) -> JobRepositoryResult<()> {
        let mut state = self.write().map_err(JobRepositoryError::persistence)?;
        let job = state
            .jobs
            .remove(&id)
            .ok_or(JobRepositoryError::NotFound(id))?;
        remove_from_index(&mut state.customer_index, id, job.customer_id());
        Ok(())
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        let state = self.read().map_err(JobRepositoryError::persistence)?;
        Ok(state.jobs.get(&id).cloned())
    }

    async fn list(&self) -> JobRepositoryResult<Vec<Job>> {
        let state = self.read().map_err(JobRepositoryError::persistence)?;
        Ok(state.jobs.values().cloned().collect())
    }

    async fn list_for_customer(&self, customer_id: CustomerId) -> JobRepositoryResult<Vec<Job>> {
        let state = self.read().map_err(JobRepositoryError::persistence)?;
        Ok(state
            .customer_index
            .get(&customer_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.jobs.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl JobReferenceIndex for InMemoryJobRepository {
    async fn jobs_for_customer(&self, id: CustomerId) -> JobReferenceResult<usize> {
        let state = self.read().map_err(JobReferenceError::persistence)?;
        Ok(state.customer_index.get(&id).map_or(0, Vec::len))
    }

    async fn jobs_for_template(&self, id: ServiceTemplateId) -> JobReferenceResult<usize> {
        let state = self.read().map_err(JobReferenceError::persistence)?;
        Ok(state
            .jobs
            .values()
            .filter(|job| job.template_id() == id)
            .count())
    }

    async fn jobs_for_staff(&self, id: StaffId) -> JobReferenceResult<usize> {
        let state = self.read().map_err(JobReferenceError::persistence)?;
        Ok(state
            .jobs
            .values()
            .filter(|job| job.assignees().contains(&id))
            .count())
    }
}
