//! Job aggregate root: sub-task completion, billing fields, derived status.

use super::{BillingState, JobDomainError, JobId, JobStatus, StepKind, SubTask, SubTaskId};
use crate::directory::domain::{CustomerId, ServiceTemplate, ServiceTemplateId, StaffId, StepName};
use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated non-empty job title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobTitle(String);

impl JobTitle {
    /// Creates a validated job title.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::EmptyJobTitle`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(JobDomainError::EmptyJobTitle);
        }
        Ok(Self(trimmed))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job aggregate root.
///
/// Invariants held by construction and mutation:
///
/// - exactly one billing-kind sub-task exists, always last in the list;
/// - a paid job is always invoiced;
/// - assignee lists carry no duplicate staff ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    customer_id: CustomerId,
    template_id: ServiceTemplateId,
    title: JobTitle,
    deadline: NaiveDate,
    assignees: Vec<StaffId>,
    sub_tasks: Vec<SubTask>,
    invoice_number: Option<String>,
    invoice_date: Option<NaiveDate>,
    paid: bool,
    paid_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Job {
    /// Instantiates a job from a service template.
    ///
    /// Sub-tasks are created open, one per template step in order, followed
    /// by any extra ad-hoc steps, with the implicit billing step appended
    /// last.
    #[must_use]
    pub fn from_template(
        customer_id: CustomerId,
        template: &ServiceTemplate,
        title: JobTitle,
        deadline: NaiveDate,
        assignees: Vec<StaffId>,
        extra_steps: &[StepName],
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let mut sub_tasks: Vec<SubTask> = template
            .steps()
            .iter()
            .chain(extra_steps)
            .map(SubTask::work)
            .collect();
        sub_tasks.push(SubTask::billing());

        Self {
            id: JobId::new(),
            customer_id,
            template_id: template.id(),
            title,
            deadline,
            assignees: dedup(assignees),
            sub_tasks,
            invoice_number: None,
            invoice_date: None,
            paid: false,
            paid_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the owning customer's identifier.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the identifier of the template the job was built from.
    #[must_use]
    pub const fn template_id(&self) -> ServiceTemplateId {
        self.template_id
    }

    /// Returns the job title.
    #[must_use]
    pub const fn title(&self) -> &JobTitle {
        &self.title
    }

    /// Returns the deadline date.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the assigned staff identifiers.
    #[must_use]
    pub fn assignees(&self) -> &[StaffId] {
        &self.assignees
    }

    /// Returns the sub-tasks in order; the billing step is always last.
    #[must_use]
    pub fn sub_tasks(&self) -> &[SubTask] {
        &self.sub_tasks
    }

    /// Returns the invoice number, if recorded.
    #[must_use]
    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice_number.as_deref()
    }

    /// Returns the invoice date, if recorded.
    #[must_use]
    pub const fn invoice_date(&self) -> Option<NaiveDate> {
        self.invoice_date
    }

    /// Returns the payment date, if recorded.
    #[must_use]
    pub const fn paid_date(&self) -> Option<NaiveDate> {
        self.paid_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Retitles the job.
    pub fn retitle(&mut self, title: JobTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Moves the deadline.
    pub fn set_deadline(&mut self, deadline: NaiveDate, clock: &impl Clock) {
        self.deadline = deadline;
        self.touch(clock);
    }

    /// Replaces the assignee list, dropping duplicate ids.
    pub fn set_assignees(&mut self, assignees: Vec<StaffId>, clock: &impl Clock) {
        self.assignees = dedup(assignees);
        self.touch(clock);
    }

    /// Sets a sub-task's done flag.
    ///
    /// Marking the billing step done records that the job is invoiced.
    /// Toggling an already-matching flag is a no-op that still refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::SubTaskNotFound`] when the id does not
    /// belong to this job, or [`JobDomainError::BillingReopenedWhilePaid`]
    /// when reopening the billing step while a payment is recorded.
    pub fn set_sub_task_done(
        &mut self,
        sub_task_id: SubTaskId,
        done: bool,
        clock: &impl Clock,
    ) -> Result<(), JobDomainError> {
        let job_id = self.id;
        let paid = self.paid;
        let task = self
            .sub_tasks
            .iter_mut()
            .find(|task| task.id() == sub_task_id)
            .ok_or(JobDomainError::SubTaskNotFound(sub_task_id))?;
        if task.kind() == StepKind::Billing && !done && paid {
            return Err(JobDomainError::BillingReopenedWhilePaid(job_id));
        }
        task.set_done(done, clock);
        self.touch(clock);
        Ok(())
    }

    /// Records an invoice, marking the billing step done.
    ///
    /// A blank invoice number is stored as `None`; the original tool lets
    /// the number be filled in later.
    pub fn record_invoice(
        &mut self,
        number: Option<String>,
        date: NaiveDate,
        clock: &impl Clock,
    ) {
        self.invoice_number = number.and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        });
        self.invoice_date = Some(date);
        for task in &mut self.sub_tasks {
            if task.kind() == StepKind::Billing && !task.is_done() {
                task.set_done(true, clock);
            }
        }
        self.touch(clock);
    }

    /// Records a payment.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::PaymentBeforeInvoice`] when the billing
    /// step is still open.
    pub fn record_payment(
        &mut self,
        date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<(), JobDomainError> {
        if !self.is_invoiced() {
            return Err(JobDomainError::PaymentBeforeInvoice(self.id));
        }
        self.paid = true;
        self.paid_date = Some(date);
        self.touch(clock);
        Ok(())
    }

    /// Clears a recorded payment. Invoice fields are kept.
    pub fn clear_payment(&mut self, clock: &impl Clock) {
        self.paid = false;
        self.paid_date = None;
        self.touch(clock);
    }

    /// Returns whether every work-kind sub-task is done.
    ///
    /// Vacuously true for a job whose only step is the billing step.
    #[must_use]
    pub fn work_complete(&self) -> bool {
        self.sub_tasks
            .iter()
            .filter(|task| task.kind() == StepKind::Work)
            .all(SubTask::is_done)
    }

    /// Returns whether the billing step is done.
    #[must_use]
    pub fn is_invoiced(&self) -> bool {
        self.sub_tasks
            .iter()
            .any(|task| task.kind() == StepKind::Billing && task.is_done())
    }

    /// Returns whether a payment is recorded.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.paid
    }

    /// Returns the derived billing state.
    #[must_use]
    pub fn billing_state(&self) -> BillingState {
        if self.paid {
            BillingState::Paid
        } else if self.is_invoiced() {
            BillingState::Invoiced
        } else {
            BillingState::NotInvoiced
        }
    }

    /// Derives the status label for a given day.
    ///
    /// Completion wins over the deadline: once every sub-task is done the
    /// job is `Completed` no matter how far past the deadline it is. The
    /// deadline day itself falls inside the due-soon window.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate, due_soon_days: u64) -> JobStatus {
        if self.sub_tasks.iter().all(SubTask::is_done) {
            return JobStatus::Completed;
        }
        if self.deadline < today {
            return JobStatus::Overdue;
        }
        today
            .checked_add_days(Days::new(due_soon_days))
            .map_or(JobStatus::DueSoon, |window_end| {
                if self.deadline <= window_end {
                    JobStatus::DueSoon
                } else {
                    JobStatus::InProgress
                }
            })
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Drops duplicate staff ids while preserving first-seen order.
fn dedup(assignees: Vec<StaffId>) -> Vec<StaffId> {
    let mut out: Vec<StaffId> = Vec::with_capacity(assignees.len());
    for id in assignees {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
