//! Unit tests for the job module.
//!
//! Tests are organised by domain concept, covering happy paths, error cases,
//! and edge cases for all public APIs.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::directory::domain::{ServiceTemplate, StepName, TemplateName};
use crate::job::domain::{Job, JobTitle};

/// Clock pinned to one instant, so date-derived behaviour is deterministic.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn at(date: NaiveDate) -> Self {
        Self(Utc.from_utc_datetime(&date.and_hms_opt(9, 0, 0).expect("valid time")))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn template(steps: &[&str], clock: &impl Clock) -> ServiceTemplate {
    let step_names = steps
        .iter()
        .map(|step| StepName::new(*step).expect("valid step"))
        .collect();
    ServiceTemplate::new(
        TemplateName::new("Dichiarazione IVA").expect("valid name"),
        step_names,
        clock,
    )
    .expect("template should validate")
}

pub(super) fn job_from(template: &ServiceTemplate, deadline: NaiveDate, clock: &impl Clock) -> Job {
    Job::from_template(
        crate::directory::domain::CustomerId::new(),
        template,
        JobTitle::new("IVA terzo trimestre").expect("valid title"),
        deadline,
        Vec::new(),
        &[],
        clock,
    )
}
