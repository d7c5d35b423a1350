//! Port contracts for directory record management.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services, including the job-reference index consulted by delete guards.

pub mod references;
pub mod repository;

pub use references::{JobReferenceError, JobReferenceIndex, JobReferenceResult};
pub use repository::{
    CustomerRepository, DirectoryRepositoryError, DirectoryRepositoryResult, StaffRepository,
    TemplateRepository,
};
