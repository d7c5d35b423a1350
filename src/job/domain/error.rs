//! Error types for job domain validation and billing transitions.

use super::{JobId, SubTaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating job domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The job title is empty after trimming.
    #[error("job title must not be empty")]
    EmptyJobTitle,

    /// The sub-task does not belong to the job.
    #[error("sub-task not found: {0}")]
    SubTaskNotFound(SubTaskId),

    /// A payment was recorded before the job was invoiced.
    #[error("job {0} cannot be marked paid before it is invoiced")]
    PaymentBeforeInvoice(JobId),

    /// The billing step was reopened while the job is marked paid.
    #[error("job {0} is paid; clear the payment before reopening billing")]
    BillingReopenedWhilePaid(JobId),
}

/// Error returned while parsing job status labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);
