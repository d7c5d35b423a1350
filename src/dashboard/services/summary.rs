//! Dashboard aggregates: status counts, billing queues, deadline windows.

use crate::directory::domain::{CustomerId, StaffId};
use crate::job::{
    domain::{BillingState, Job, JobStatus, DEFAULT_DUE_SOON_DAYS},
    ports::{JobRepository, JobRepositoryError},
};
use chrono::{Days, NaiveDate};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by dashboard queries.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Job store lookup failed.
    #[error(transparent)]
    Repository(#[from] JobRepositoryError),
}

/// Result type for dashboard queries.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Counts derived from the whole job collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Total number of jobs.
    pub total: usize,
    /// Jobs with every sub-task done.
    pub completed: usize,
    /// Jobs past their deadline with work outstanding.
    pub overdue: usize,
    /// Jobs whose deadline falls inside the due-soon window.
    pub due_soon: usize,
    /// Jobs with work outstanding and a comfortable deadline.
    pub in_progress: usize,
    /// Jobs whose work steps are all done but whose billing step is open.
    pub awaiting_invoice: usize,
    /// Invoiced jobs with no payment recorded.
    pub awaiting_payment: usize,
}

/// Conjunctive filter criteria for job listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobFilter {
    customer: Option<CustomerId>,
    assignee: Option<StaffId>,
    status: Option<JobStatus>,
}

impl JobFilter {
    /// Creates an empty filter that matches every job.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customer: None,
            assignee: None,
            status: None,
        }
    }

    /// Restricts matches to one customer's jobs.
    #[must_use]
    pub const fn for_customer(mut self, customer: CustomerId) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Restricts matches to jobs assigned to one staff member.
    #[must_use]
    pub const fn for_assignee(mut self, assignee: StaffId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Restricts matches to jobs with one derived status.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether a job matches every set criterion.
    fn matches(&self, job: &Job, today: NaiveDate, due_soon_days: u64) -> bool {
        if self.customer.is_some_and(|id| job.customer_id() != id) {
            return false;
        }
        if self
            .assignee
            .is_some_and(|id| !job.assignees().contains(&id))
        {
            return false;
        }
        self.status
            .is_none_or(|status| job.status_on(today, due_soon_days) == status)
    }
}

/// Read-side dashboard service.
#[derive(Clone)]
pub struct DashboardService<J, C>
where
    J: JobRepository,
    C: Clock + Send + Sync,
{
    jobs: Arc<J>,
    clock: Arc<C>,
    due_soon_days: u64,
}

impl<J, C> DashboardService<J, C>
where
    J: JobRepository,
    C: Clock + Send + Sync,
{
    /// Creates a dashboard service with the default due-soon window.
    #[must_use]
    pub const fn new(jobs: Arc<J>, clock: Arc<C>) -> Self {
        Self {
            jobs,
            clock,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }

    /// Overrides the due-soon window width in days.
    #[must_use]
    pub const fn with_due_soon_window(mut self, days: u64) -> Self {
        self.due_soon_days = days;
        self
    }

    /// Computes the per-status and billing-queue counts.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Repository`] when the job store lookup
    /// fails.
    pub async fn summary(&self) -> DashboardResult<DashboardSummary> {
        let today = self.today();
        let mut summary = DashboardSummary::default();
        for job in self.jobs.list().await? {
            summary.total += 1;
            match job.status_on(today, self.due_soon_days) {
                JobStatus::Completed => summary.completed += 1,
                JobStatus::Overdue => summary.overdue += 1,
                JobStatus::DueSoon => summary.due_soon += 1,
                JobStatus::InProgress => summary.in_progress += 1,
            }
            match job.billing_state() {
                BillingState::NotInvoiced if job.work_complete() => {
                    summary.awaiting_invoice += 1;
                }
                BillingState::Invoiced => summary.awaiting_payment += 1,
                BillingState::NotInvoiced | BillingState::Paid => {}
            }
        }
        Ok(summary)
    }

    /// Returns the jobs carrying one derived status, soonest deadline first.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Repository`] when the job store lookup
    /// fails.
    pub async fn jobs_with_status(&self, status: JobStatus) -> DashboardResult<Vec<Job>> {
        let today = self.today();
        let mut jobs: Vec<Job> = self
            .jobs
            .list()
            .await?
            .into_iter()
            .filter(|job| job.status_on(today, self.due_soon_days) == status)
            .collect();
        sort_by_deadline(&mut jobs);
        Ok(jobs)
    }

    /// Returns open jobs whose deadline falls within `days` from today,
    /// soonest first. Overdue jobs are excluded; they have their own view.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Repository`] when the job store lookup
    /// fails.
    pub async fn upcoming(&self, days: u64) -> DashboardResult<Vec<Job>> {
        let today = self.today();
        let window_end = today.checked_add_days(Days::new(days));
        let mut jobs: Vec<Job> = self
            .jobs
            .list()
            .await?
            .into_iter()
            .filter(|job| {
                job.status_on(today, self.due_soon_days) != JobStatus::Completed
                    && job.deadline() >= today
                    && window_end.is_none_or(|end| job.deadline() <= end)
            })
            .collect();
        sort_by_deadline(&mut jobs);
        Ok(jobs)
    }

    /// Returns the jobs matching every criterion of the filter, soonest
    /// deadline first.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Repository`] when the job store lookup
    /// fails.
    pub async fn filter(&self, filter: &JobFilter) -> DashboardResult<Vec<Job>> {
        let today = self.today();
        let mut jobs: Vec<Job> = self
            .jobs
            .list()
            .await?
            .into_iter()
            .filter(|job| filter.matches(job, today, self.due_soon_days))
            .collect();
        sort_by_deadline(&mut jobs);
        Ok(jobs)
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

/// Sorts by deadline ascending, breaking ties by title.
fn sort_by_deadline(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| {
        a.deadline()
            .cmp(&b.deadline())
            .then_with(|| a.title().as_str().cmp(b.title().as_str()))
    });
}
