//! Sub-task: one step within a job.

use super::SubTaskId;
use crate::directory::domain::{StepName, BILLING_STEP_NAME};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of a sub-task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// An ordinary work step from the template or added ad hoc.
    Work,
    /// The implicit billing step every job carries.
    Billing,
}

impl StepKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Billing => "billing",
        }
    }
}

/// One step within a job.
///
/// Completing the billing-kind step means the job has been invoiced; that
/// transition is guarded by the [`Job`](super::Job) aggregate, never applied
/// to the step directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    id: SubTaskId,
    name: String,
    kind: StepKind,
    done: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl SubTask {
    /// Creates an open work step.
    #[must_use]
    pub fn work(name: &StepName) -> Self {
        Self {
            id: SubTaskId::new(),
            name: name.as_str().to_owned(),
            kind: StepKind::Work,
            done: false,
            completed_at: None,
        }
    }

    /// Creates the open implicit billing step.
    #[must_use]
    pub fn billing() -> Self {
        Self {
            id: SubTaskId::new(),
            name: BILLING_STEP_NAME.to_owned(),
            kind: StepKind::Billing,
            done: false,
            completed_at: None,
        }
    }

    /// Returns the sub-task identifier.
    #[must_use]
    pub const fn id(&self) -> SubTaskId {
        self.id
    }

    /// Returns the step name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the step kind.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns whether the step is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns when the step was last marked done, if it is done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Sets the done flag, stamping or clearing the completion time.
    pub(crate) fn set_done(&mut self, done: bool, clock: &impl Clock) {
        self.done = done;
        self.completed_at = done.then(|| clock.utc());
    }
}
