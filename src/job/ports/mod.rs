//! Port contracts for job lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by job services and
//! the dashboard read side.

pub mod repository;

pub use repository::{JobRepository, JobRepositoryError, JobRepositoryResult};
