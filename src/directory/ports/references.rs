//! Job-reference index port consulted by directory delete guards.
//!
//! Deleting a customer, staff member, or template must fail while any job
//! still holds its id. The directory module does not know the job aggregate;
//! it only needs reference counts, so the contract is kept to that.

use crate::directory::domain::{CustomerId, ServiceTemplateId, StaffId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job-reference lookups.
pub type JobReferenceResult<T> = Result<T, JobReferenceError>;

/// Reference-count contract over the job store.
#[async_trait]
pub trait JobReferenceIndex: Send + Sync {
    /// Returns how many jobs belong to the given customer.
    async fn jobs_for_customer(&self, id: CustomerId) -> JobReferenceResult<usize>;

    /// Returns how many jobs were instantiated from the given template.
    async fn jobs_for_template(&self, id: ServiceTemplateId) -> JobReferenceResult<usize>;

    /// Returns how many jobs list the given staff member as an assignee.
    async fn jobs_for_staff(&self, id: StaffId) -> JobReferenceResult<usize>;
}

/// Errors returned by job-reference index implementations.
#[derive(Debug, Clone, Error)]
pub enum JobReferenceError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobReferenceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
