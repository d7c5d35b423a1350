//! Application services for directory record management.

mod registry;

pub use registry::{
    CreateCustomerRequest, CreateStaffRequest, CreateTemplateRequest, DirectoryService,
    DirectoryServiceError, DirectoryServiceResult,
};
