//! Domain model for the job aggregate.
//!
//! Jobs reference directory records by id, own their sub-tasks, and derive
//! status and billing labels instead of storing them. All infrastructure
//! concerns stay outside the domain boundary.

mod error;
mod ids;
mod job;
mod status;
mod subtask;

pub use error::{JobDomainError, ParseJobStatusError};
pub use ids::{JobId, SubTaskId};
pub use job::{Job, JobTitle};
pub use status::{BillingState, JobStatus, DEFAULT_DUE_SOON_DAYS};
pub use subtask::{StepKind, SubTask};
