//! Error types for directory record validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The customer name is empty after trimming.
    #[error("customer name must not be empty")]
    EmptyCustomerName,

    /// The staff member name is empty after trimming.
    #[error("staff name must not be empty")]
    EmptyStaffName,

    /// The service template name is empty after trimming.
    #[error("template name must not be empty")]
    EmptyTemplateName,

    /// A template step name is empty after trimming.
    #[error("step name must not be empty")]
    EmptyStepName,

    /// A template lists the same step name twice.
    #[error("duplicate step name '{0}' in template")]
    DuplicateStepName(String),

    /// A template names the reserved billing step, which every job carries
    /// implicitly.
    #[error("step name '{0}' is reserved for the implicit billing step")]
    ReservedStepName(String),
}
