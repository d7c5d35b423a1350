//! Repository ports for customer, staff, and template persistence.

use crate::directory::domain::{
    Customer, CustomerId, ServiceTemplate, ServiceTemplateId, StaffId, StaffMember,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// Customer persistence contract.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Stores a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateCustomer`] when the
    /// customer ID already exists.
    async fn store_customer(&self, customer: &Customer) -> DirectoryRepositoryResult<()>;

    /// Persists changes to an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::CustomerNotFound`] when the
    /// customer does not exist.
    async fn update_customer(&self, customer: &Customer) -> DirectoryRepositoryResult<()>;

    /// Removes a customer. Referential guards are the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::CustomerNotFound`] when the
    /// customer does not exist.
    async fn remove_customer(&self, id: CustomerId) -> DirectoryRepositoryResult<()>;

    /// Finds a customer by identifier, returning `None` when absent.
    async fn find_customer(&self, id: CustomerId) -> DirectoryRepositoryResult<Option<Customer>>;

    /// Returns all customers.
    async fn list_customers(&self) -> DirectoryRepositoryResult<Vec<Customer>>;
}

/// Staff persistence contract.
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Stores a new staff member.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateStaff`] when the staff ID
    /// already exists.
    async fn store_staff(&self, member: &StaffMember) -> DirectoryRepositoryResult<()>;

    /// Persists changes to an existing staff member.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::StaffNotFound`] when the staff
    /// member does not exist.
    async fn update_staff(&self, member: &StaffMember) -> DirectoryRepositoryResult<()>;

    /// Removes a staff member. Referential guards are the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::StaffNotFound`] when the staff
    /// member does not exist.
    async fn remove_staff(&self, id: StaffId) -> DirectoryRepositoryResult<()>;

    /// Finds a staff member by identifier, returning `None` when absent.
    async fn find_staff(&self, id: StaffId) -> DirectoryRepositoryResult<Option<StaffMember>>;

    /// Returns all staff members.
    async fn list_staff(&self) -> DirectoryRepositoryResult<Vec<StaffMember>>;
}

/// Service template persistence contract.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateTemplate`] when the
    /// template ID already exists.
    async fn store_template(&self, template: &ServiceTemplate) -> DirectoryRepositoryResult<()>;

    /// Persists changes to an existing template.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::TemplateNotFound`] when the
    /// template does not exist.
    async fn update_template(&self, template: &ServiceTemplate) -> DirectoryRepositoryResult<()>;

    /// Removes a template. Referential guards are the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::TemplateNotFound`] when the
    /// template does not exist.
    async fn remove_template(&self, id: ServiceTemplateId) -> DirectoryRepositoryResult<()>;

    /// Finds a template by identifier, returning `None` when absent.
    async fn find_template(
        &self,
        id: ServiceTemplateId,
    ) -> DirectoryRepositoryResult<Option<ServiceTemplate>>;

    /// Returns all templates.
    async fn list_templates(&self) -> DirectoryRepositoryResult<Vec<ServiceTemplate>>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// A customer with the same identifier already exists.
    #[error("duplicate customer identifier: {0}")]
    DuplicateCustomer(CustomerId),

    /// The customer was not found.
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// A staff member with the same identifier already exists.
    #[error("duplicate staff identifier: {0}")]
    DuplicateStaff(StaffId),

    /// The staff member was not found.
    #[error("staff member not found: {0}")]
    StaffNotFound(StaffId),

    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(ServiceTemplateId),

    /// The template was not found.
    #[error("template not found: {0}")]
    TemplateNotFound(ServiceTemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
