//! Domain model for directory records.
//!
//! Customers, staff members, and service templates are the records jobs
//! reference by id. All scalar values are validated at construction so a
//! stored record is always well-formed.

mod customer;
mod error;
mod ids;
mod staff;
mod template;

pub use customer::{ContactDetails, Customer, CustomerName};
pub use error::DirectoryDomainError;
pub use ids::{CustomerId, ServiceTemplateId, StaffId};
pub use staff::{StaffMember, StaffName};
pub use template::{ServiceTemplate, StepName, TemplateName, BILLING_STEP_NAME};
