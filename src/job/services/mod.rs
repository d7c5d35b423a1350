//! Application services for job lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateJobRequest, JobLifecycleError, JobLifecycleResult, JobLifecycleService,
};
