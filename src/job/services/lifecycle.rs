//! Service layer for job creation and lifecycle mutation.
//!
//! Every operation that references a directory record validates the
//! reference first, so a stored job never points at a missing customer,
//! template, or staff member.

use crate::directory::domain::{
    CustomerId, DirectoryDomainError, ServiceTemplate, ServiceTemplateId, StaffId, StepName,
};
use crate::directory::ports::{
    CustomerRepository, DirectoryRepositoryError, StaffRepository, TemplateRepository,
};
use crate::job::{
    domain::{Job, JobDomainError, JobId, JobTitle, SubTaskId},
    ports::{JobRepository, JobRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a job from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJobRequest {
    customer_id: CustomerId,
    template_id: ServiceTemplateId,
    title: String,
    deadline: NaiveDate,
    assignees: Vec<StaffId>,
    extra_steps: Vec<String>,
}

impl CreateJobRequest {
    /// Creates a request with the required job fields.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        template_id: ServiceTemplateId,
        title: impl Into<String>,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            customer_id,
            template_id,
            title: title.into(),
            deadline,
            assignees: Vec::new(),
            extra_steps: Vec::new(),
        }
    }

    /// Sets the assigned staff members.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = StaffId>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Adds ad-hoc work steps beyond the template's list.
    #[must_use]
    pub fn with_extra_steps(mut self, steps: impl IntoIterator<Item = String>) -> Self {
        self.extra_steps = steps.into_iter().collect();
        self
    }
}

/// Service-level errors for job lifecycle operations.
#[derive(Debug, Error)]
pub enum JobLifecycleError {
    /// Job domain validation failed.
    #[error(transparent)]
    Domain(#[from] JobDomainError),

    /// An ad-hoc step name failed directory validation.
    #[error(transparent)]
    StepName(#[from] DirectoryDomainError),

    /// Job repository operation failed.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),

    /// Directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryRepositoryError),

    /// The referenced customer does not exist.
    #[error("unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    /// The referenced template does not exist.
    #[error("unknown template: {0}")]
    UnknownTemplate(ServiceTemplateId),

    /// A referenced staff member does not exist.
    #[error("unknown staff member: {0}")]
    UnknownStaff(StaffId),
}

/// Result type for job lifecycle service operations.
pub type JobLifecycleResult<T> = Result<T, JobLifecycleError>;

/// Job lifecycle orchestration service.
#[derive(Clone)]
pub struct JobLifecycleService<J, D, C>
where
    J: JobRepository,
    D: CustomerRepository + StaffRepository + TemplateRepository,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    directory: Arc<D>,
    clock: Arc<C>,
}

impl<J, D, C> JobLifecycleService<J, D, C>
where
    J: JobRepository,
    D: CustomerRepository + StaffRepository + TemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new job lifecycle service.
    #[must_use]
    pub const fn new(jobs: Arc<J>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            jobs,
            directory,
            clock,
        }
    }

    /// Creates a job from a service template.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError`] when the customer, template, or any
    /// assignee does not exist, when the title or an extra step name fails
    /// validation, or when the repository rejects persistence.
    pub async fn create_job(&self, request: CreateJobRequest) -> JobLifecycleResult<Job> {
        let CreateJobRequest {
            customer_id,
            template_id,
            title,
            deadline,
            assignees,
            extra_steps,
        } = request;

        if self.directory.find_customer(customer_id).await?.is_none() {
            return Err(JobLifecycleError::UnknownCustomer(customer_id));
        }
        let template = self.template_or_error(template_id).await?;
        self.check_staff_exist(&assignees).await?;
        let extra = extra_steps
            .into_iter()
            .map(StepName::new)
            .collect::<Result<Vec<_>, _>>()?;

        let job = Job::from_template(
            customer_id,
            &template,
            JobTitle::new(title)?,
            deadline,
            assignees,
            &extra,
            &*self.clock,
        );
        self.jobs.store(&job).await?;
        tracing::info!(job = %job.id(), customer = %customer_id, "job created");
        Ok(job)
    }

    /// Retitles a job.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError`] when the job is missing or the title
    /// fails validation.
    pub async fn retitle_job(
        &self,
        id: JobId,
        title: impl Into<String>,
    ) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.retitle(JobTitle::new(title)?, &*self.clock);
        self.jobs.update(&job).await?;
        Ok(job)
    }

    /// Moves a job's deadline.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn move_deadline(&self, id: JobId, deadline: NaiveDate) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.set_deadline(deadline, &*self.clock);
        self.jobs.update(&job).await?;
        Ok(job)
    }

    /// Replaces a job's assignee list after validating every staff id.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::UnknownStaff`] when an id does not
    /// resolve, or [`JobLifecycleError::Repository`] when the job is missing
    /// or persistence fails.
    pub async fn set_assignees(
        &self,
        id: JobId,
        assignees: Vec<StaffId>,
    ) -> JobLifecycleResult<Job> {
        self.check_staff_exist(&assignees).await?;
        let mut job = self.job_or_error(id).await?;
        job.set_assignees(assignees, &*self.clock);
        self.jobs.update(&job).await?;
        Ok(job)
    }

    /// Sets a sub-task's done flag, honouring the billing guards.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Domain`] when the sub-task is unknown or
    /// the billing step is reopened while paid, or
    /// [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn set_sub_task_done(
        &self,
        id: JobId,
        sub_task_id: SubTaskId,
        done: bool,
    ) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.set_sub_task_done(sub_task_id, done, &*self.clock)?;
        self.jobs.update(&job).await?;
        tracing::debug!(job = %id, sub_task = %sub_task_id, done, "sub-task toggled");
        Ok(job)
    }

    /// Records an invoice, marking the billing step done.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn record_invoice(
        &self,
        id: JobId,
        number: Option<String>,
        date: NaiveDate,
    ) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.record_invoice(number, date, &*self.clock);
        self.jobs.update(&job).await?;
        tracing::info!(job = %id, "invoice recorded");
        Ok(job)
    }

    /// Records a payment against an invoiced job.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Domain`] when the job is not invoiced,
    /// or [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn record_payment(&self, id: JobId, date: NaiveDate) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.record_payment(date, &*self.clock)?;
        self.jobs.update(&job).await?;
        tracing::info!(job = %id, "payment recorded");
        Ok(job)
    }

    /// Clears a recorded payment, keeping the invoice fields.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn clear_payment(&self, id: JobId) -> JobLifecycleResult<Job> {
        let mut job = self.job_or_error(id).await?;
        job.clear_payment(&*self.clock);
        self.jobs.update(&job).await?;
        Ok(job)
    }

    /// Deletes a job. Jobs are leaves, so no referential guard applies.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when the job is missing or
    /// persistence fails.
    pub async fn delete_job(&self, id: JobId) -> JobLifecycleResult<()> {
        self.jobs.remove(id).await?;
        tracing::info!(job = %id, "job deleted");
        Ok(())
    }

    /// Finds a job by identifier, returning `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: JobId) -> JobLifecycleResult<Option<Job>> {
        Ok(self.jobs.find_by_id(id).await?)
    }

    /// Returns all jobs.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> JobLifecycleResult<Vec<Job>> {
        Ok(self.jobs.list().await?)
    }

    /// Returns all jobs belonging to the given customer.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_for_customer(&self, customer_id: CustomerId) -> JobLifecycleResult<Vec<Job>> {
        Ok(self.jobs.list_for_customer(customer_id).await?)
    }

    async fn job_or_error(&self, id: JobId) -> JobLifecycleResult<Job> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| JobRepositoryError::NotFound(id).into())
    }

    async fn template_or_error(
        &self,
        id: ServiceTemplateId,
    ) -> JobLifecycleResult<ServiceTemplate> {
        self.directory
            .find_template(id)
            .await?
            .ok_or(JobLifecycleError::UnknownTemplate(id))
    }

    async fn check_staff_exist(&self, assignees: &[StaffId]) -> JobLifecycleResult<()> {
        for staff_id in assignees {
            if self.directory.find_staff(*staff_id).await?.is_none() {
                return Err(JobLifecycleError::UnknownStaff(*staff_id));
            }
        }
        Ok(())
    }
}
