//! Service layer for directory record management.
//!
//! Provides [`DirectoryService`] which coordinates customer, staff, and
//! template CRUD and enforces the referential-integrity delete guards: a
//! record still referenced by a job cannot be removed.

use crate::directory::{
    domain::{
        ContactDetails, Customer, CustomerId, CustomerName, DirectoryDomainError, ServiceTemplate,
        ServiceTemplateId, StaffId, StaffMember, StaffName, StepName, TemplateName,
    },
    ports::{
        CustomerRepository, DirectoryRepositoryError, JobReferenceError, JobReferenceIndex,
        StaffRepository, TemplateRepository,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerRequest {
    name: String,
    contact: Option<ContactDetails>,
    notes: Option<String>,
}

impl CreateCustomerRequest {
    /// Creates a request with the required customer name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: None,
            notes: None,
        }
    }

    /// Sets contact details.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactDetails) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Request payload for creating a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStaffRequest {
    name: String,
    role: Option<String>,
}

impl CreateStaffRequest {
    /// Creates a request with the required staff name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
        }
    }

    /// Sets the role label.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Request payload for creating a service template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateRequest {
    name: String,
    steps: Vec<String>,
}

impl CreateTemplateRequest {
    /// Creates a request with the required template name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Sets the ordered work-step names.
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = String>) -> Self {
        self.steps = steps.into_iter().collect();
        self
    }
}

/// Service-level errors for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),

    /// Job-reference lookup failed.
    #[error(transparent)]
    References(#[from] JobReferenceError),

    /// The customer is still referenced by jobs and cannot be deleted.
    #[error("customer {id} is referenced by {jobs} job(s)")]
    CustomerInUse {
        /// Customer that was targeted for deletion.
        id: CustomerId,
        /// Number of jobs holding the reference.
        jobs: usize,
    },

    /// The staff member is still assigned to jobs and cannot be deleted.
    #[error("staff member {id} is assigned to {jobs} job(s)")]
    StaffInUse {
        /// Staff member that was targeted for deletion.
        id: StaffId,
        /// Number of jobs holding the assignment.
        jobs: usize,
    },

    /// The template is still referenced by jobs and cannot be deleted.
    #[error("template {id} is referenced by {jobs} job(s)")]
    TemplateInUse {
        /// Template that was targeted for deletion.
        id: ServiceTemplateId,
        /// Number of jobs instantiated from it.
        jobs: usize,
    },
}

/// Result type for directory service operations.
pub type DirectoryServiceResult<T> = Result<T, DirectoryServiceError>;

/// Directory CRUD and delete-guard orchestration service.
#[derive(Clone)]
pub struct DirectoryService<D, J, C>
where
    D: CustomerRepository + StaffRepository + TemplateRepository,
    J: JobReferenceIndex,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    job_refs: Arc<J>,
    clock: Arc<C>,
}

impl<D, J, C> DirectoryService<D, J, C>
where
    D: CustomerRepository + StaffRepository + TemplateRepository,
    J: JobReferenceIndex,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(directory: Arc<D>, job_refs: Arc<J>, clock: Arc<C>) -> Self {
        Self {
            directory,
            job_refs,
            clock,
        }
    }

    // --- customers ---

    /// Creates a new customer record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when the name fails validation or
    /// the repository rejects persistence.
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> DirectoryServiceResult<Customer> {
        let CreateCustomerRequest {
            name,
            contact,
            notes,
        } = request;
        let mut customer = Customer::new(CustomerName::new(name)?, &*self.clock);
        if contact.is_some() {
            customer.set_contact(contact, &*self.clock);
        }
        if notes.is_some() {
            customer.set_notes(notes, &*self.clock);
        }
        self.directory.store_customer(&customer).await?;
        tracing::info!(customer = %customer.id(), "customer created");
        Ok(customer)
    }

    /// Renames a customer.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when the customer is missing or the
    /// new name fails validation.
    pub async fn rename_customer(
        &self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> DirectoryServiceResult<Customer> {
        let mut customer = self.customer_or_error(id).await?;
        customer.rename(CustomerName::new(name)?, &*self.clock);
        self.directory.update_customer(&customer).await?;
        Ok(customer)
    }

    /// Replaces a customer's contact details.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the customer is
    /// missing or persistence fails.
    pub async fn set_customer_contact(
        &self,
        id: CustomerId,
        contact: Option<ContactDetails>,
    ) -> DirectoryServiceResult<Customer> {
        let mut customer = self.customer_or_error(id).await?;
        customer.set_contact(contact, &*self.clock);
        self.directory.update_customer(&customer).await?;
        Ok(customer)
    }

    /// Replaces a customer's notes.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the customer is
    /// missing or persistence fails.
    pub async fn set_customer_notes(
        &self,
        id: CustomerId,
        notes: Option<String>,
    ) -> DirectoryServiceResult<Customer> {
        let mut customer = self.customer_or_error(id).await?;
        customer.set_notes(notes, &*self.clock);
        self.directory.update_customer(&customer).await?;
        Ok(customer)
    }

    /// Deletes a customer after checking no job references it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::CustomerInUse`] when at least one job
    /// belongs to the customer, or [`DirectoryServiceError::Repository`] when
    /// the customer is missing or persistence fails.
    pub async fn delete_customer(&self, id: CustomerId) -> DirectoryServiceResult<()> {
        let jobs = self.job_refs.jobs_for_customer(id).await?;
        if jobs > 0 {
            return Err(DirectoryServiceError::CustomerInUse { id, jobs });
        }
        self.directory.remove_customer(id).await?;
        tracing::info!(customer = %id, "customer deleted");
        Ok(())
    }

    /// Finds a customer by identifier, returning `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_customer(&self, id: CustomerId) -> DirectoryServiceResult<Option<Customer>> {
        Ok(self.directory.find_customer(id).await?)
    }

    /// Returns all customers sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_customers(&self) -> DirectoryServiceResult<Vec<Customer>> {
        Ok(self.directory.list_customers().await?)
    }

    // --- staff ---

    /// Creates a new staff member record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when the name fails validation or
    /// the repository rejects persistence.
    pub async fn create_staff(
        &self,
        request: CreateStaffRequest,
    ) -> DirectoryServiceResult<StaffMember> {
        let CreateStaffRequest { name, role } = request;
        let mut member = StaffMember::new(StaffName::new(name)?, &*self.clock);
        if role.is_some() {
            member.set_role(role, &*self.clock);
        }
        self.directory.store_staff(&member).await?;
        tracing::info!(staff = %member.id(), "staff member created");
        Ok(member)
    }

    /// Renames a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when the member is missing or the
    /// new name fails validation.
    pub async fn rename_staff(
        &self,
        id: StaffId,
        name: impl Into<String>,
    ) -> DirectoryServiceResult<StaffMember> {
        let mut member = self.staff_or_error(id).await?;
        member.rename(StaffName::new(name)?, &*self.clock);
        self.directory.update_staff(&member).await?;
        Ok(member)
    }

    /// Replaces a staff member's role label.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the member is
    /// missing or persistence fails.
    pub async fn set_staff_role(
        &self,
        id: StaffId,
        role: Option<String>,
    ) -> DirectoryServiceResult<StaffMember> {
        let mut member = self.staff_or_error(id).await?;
        member.set_role(role, &*self.clock);
        self.directory.update_staff(&member).await?;
        Ok(member)
    }

    /// Marks a staff member inactive.
    ///
    /// Existing assignments are unaffected; deactivation is the supported
    /// path when a member with assignments leaves.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the member is
    /// missing or persistence fails.
    pub async fn deactivate_staff(&self, id: StaffId) -> DirectoryServiceResult<StaffMember> {
        let mut member = self.staff_or_error(id).await?;
        member.deactivate(&*self.clock);
        self.directory.update_staff(&member).await?;
        Ok(member)
    }

    /// Marks a staff member active.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the member is
    /// missing or persistence fails.
    pub async fn activate_staff(&self, id: StaffId) -> DirectoryServiceResult<StaffMember> {
        let mut member = self.staff_or_error(id).await?;
        member.activate(&*self.clock);
        self.directory.update_staff(&member).await?;
        Ok(member)
    }

    /// Deletes a staff member after checking no job assigns them.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::StaffInUse`] when at least one job
    /// lists the member as an assignee, or
    /// [`DirectoryServiceError::Repository`] when the member is missing or
    /// persistence fails.
    pub async fn delete_staff(&self, id: StaffId) -> DirectoryServiceResult<()> {
        let jobs = self.job_refs.jobs_for_staff(id).await?;
        if jobs > 0 {
            return Err(DirectoryServiceError::StaffInUse { id, jobs });
        }
        self.directory.remove_staff(id).await?;
        tracing::info!(staff = %id, "staff member deleted");
        Ok(())
    }

    /// Finds a staff member by identifier, returning `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_staff(&self, id: StaffId) -> DirectoryServiceResult<Option<StaffMember>> {
        Ok(self.directory.find_staff(id).await?)
    }

    /// Returns all staff members sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_staff(&self) -> DirectoryServiceResult<Vec<StaffMember>> {
        Ok(self.directory.list_staff().await?)
    }

    // --- templates ---

    /// Creates a new service template.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Domain`] when the name or a step name
    /// fails validation, or [`DirectoryServiceError::Repository`] when the
    /// repository rejects persistence.
    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> DirectoryServiceResult<ServiceTemplate> {
        let CreateTemplateRequest { name, steps } = request;
        let step_names = steps
            .into_iter()
            .map(StepName::new)
            .collect::<Result<Vec<_>, _>>()?;
        let template =
            ServiceTemplate::new(TemplateName::new(name)?, step_names, &*self.clock)?;
        self.directory.store_template(&template).await?;
        tracing::info!(template = %template.id(), "template created");
        Ok(template)
    }

    /// Renames a template.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when the template is missing or the
    /// new name fails validation.
    pub async fn rename_template(
        &self,
        id: ServiceTemplateId,
        name: impl Into<String>,
    ) -> DirectoryServiceResult<ServiceTemplate> {
        let mut template = self.template_or_error(id).await?;
        template.rename(TemplateName::new(name)?, &*self.clock);
        self.directory.update_template(&template).await?;
        Ok(template)
    }

    /// Replaces a template's step list. Existing jobs are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Domain`] when a step name fails
    /// validation, or [`DirectoryServiceError::Repository`] when the template
    /// is missing or persistence fails.
    pub async fn set_template_steps(
        &self,
        id: ServiceTemplateId,
        steps: Vec<String>,
    ) -> DirectoryServiceResult<ServiceTemplate> {
        let step_names = steps
            .into_iter()
            .map(StepName::new)
            .collect::<Result<Vec<_>, _>>()?;
        let mut template = self.template_or_error(id).await?;
        template.set_steps(step_names, &*self.clock)?;
        self.directory.update_template(&template).await?;
        Ok(template)
    }

    /// Deletes a template after checking no job was instantiated from it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::TemplateInUse`] when at least one job
    /// references the template, or [`DirectoryServiceError::Repository`] when
    /// the template is missing or persistence fails.
    pub async fn delete_template(&self, id: ServiceTemplateId) -> DirectoryServiceResult<()> {
        let jobs = self.job_refs.jobs_for_template(id).await?;
        if jobs > 0 {
            return Err(DirectoryServiceError::TemplateInUse { id, jobs });
        }
        self.directory.remove_template(id).await?;
        tracing::info!(template = %id, "template deleted");
        Ok(())
    }

    /// Finds a template by identifier, returning `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_template(
        &self,
        id: ServiceTemplateId,
    ) -> DirectoryServiceResult<Option<ServiceTemplate>> {
        Ok(self.directory.find_template(id).await?)
    }

    /// Returns all templates sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_templates(&self) -> DirectoryServiceResult<Vec<ServiceTemplate>> {
        Ok(self.directory.list_templates().await?)
    }

    async fn customer_or_error(&self, id: CustomerId) -> DirectoryServiceResult<Customer> {
        self.directory
            .find_customer(id)
            .await?
            .ok_or_else(|| DirectoryRepositoryError::CustomerNotFound(id).into())
    }

    async fn staff_or_error(&self, id: StaffId) -> DirectoryServiceResult<StaffMember> {
        self.directory
            .find_staff(id)
            .await?
            .ok_or_else(|| DirectoryRepositoryError::StaffNotFound(id).into())
    }

    async fn template_or_error(
        &self,
        id: ServiceTemplateId,
    ) -> DirectoryServiceResult<ServiceTemplate> {
        self.directory
            .find_template(id)
            .await?
            .ok_or_else(|| DirectoryRepositoryError::TemplateNotFound(id).into())
    }
}
