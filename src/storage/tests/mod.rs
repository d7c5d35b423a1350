//! Unit tests for the storage module.
//!
//! Tests are organised by concern: snapshot validation, the snapshot
//! stores, and the hydrate/checkpoint workspace service.


use chrono::NaiveDate;
use mockable::Clock;

use crate::directory::domain::{
    Customer, CustomerName, ServiceTemplate, StaffMember, StaffName, StepName, TemplateName,
};
use crate::job::domain::{Job, JobTitle};
use crate::storage::domain::WorkspaceSnapshot;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn customer(name: &str, clock: &impl Clock) -> Customer {
    Customer::new(CustomerName::new(name).expect("valid name"), clock)
}

pub(super) fn staff(name: &str, clock: &impl Clock) -> StaffMember {
    StaffMember::new(StaffName::new(name).expect("valid name"), clock)
}

pub(super) fn template(name: &str, clock: &impl Clock) -> ServiceTemplate {
    ServiceTemplate::new(
        TemplateName::new(name).expect("valid name"),
        vec![StepName::new("Raccolta documenti").expect("valid step")],
        clock,
    )
    .expect("template should validate")
}

pub(super) fn job(
    customer: &Customer,
    template: &ServiceTemplate,
    assignees: Vec<crate::directory::domain::StaffId>,
    clock: &impl Clock,
) -> Job {
    Job::from_template(
        customer.id(),
        template,
        JobTitle::new("IVA terzo trimestre").expect("valid title"),
        date(2026, 10, 15),
        assignees,
        &[],
        clock,
    )
}

/// One customer, one staff member, one template, and one job referencing
/// all three.
pub(super) fn consistent_snapshot(clock: &impl Clock) -> WorkspaceSnapshot {
    let rossi = customer("Rossi Srl", clock);
    let giulia = staff("Giulia Ferri", clock);
    let iva = template("Dichiarazione IVA", clock);
    let filing = job(&rossi, &iva, vec![giulia.id()], clock);
    WorkspaceSnapshot::new(vec![rossi], vec![giulia], vec![iva], vec![filing])
}
