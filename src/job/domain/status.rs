//! Derived status labels for jobs.
//!
//! Neither label is stored: both are recomputed from the deadline, the
//! sub-task done flags, and the invoice fields every time they are read.

use super::ParseJobStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width of the due-soon window, in days. The deadline day itself
/// counts, so a job due today is due soon rather than overdue.
pub const DEFAULT_DUE_SOON_DAYS: u64 = 7;

/// Deadline-and-completion status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Every sub-task, billing included, is done.
    Completed,
    /// The deadline has passed with work outstanding.
    Overdue,
    /// The deadline falls within the due-soon window.
    DueSoon,
    /// Work is outstanding and the deadline is comfortably ahead.
    InProgress,
}

impl JobStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ParseJobStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            "due_soon" => Ok(Self::DueSoon),
            "in_progress" => Ok(Self::InProgress),
            _ => Err(ParseJobStatusError(value.to_owned())),
        }
    }
}

/// Billing progress of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingState {
    /// The billing step is still open.
    NotInvoiced,
    /// The billing step is done but no payment is recorded.
    Invoiced,
    /// A payment has been recorded.
    Paid,
}

impl BillingState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotInvoiced => "not_invoiced",
            Self::Invoiced => "invoiced",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for BillingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
