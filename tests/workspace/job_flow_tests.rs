//! End-to-end job flow: create from a template, work the steps, invoice,
//! collect payment, and watch the dashboard follow along.

use super::helpers::{Office, date, office, seed_directory};
use commessa::job::{
    domain::{BillingState, JobStatus},
    services::CreateJobRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn job_runs_from_creation_to_payment(office: Office) {
    let (customer, member, template) = seed_directory(&office.directory)
        .await
        .expect("directory seeding should succeed");

    let job = office
        .jobs
        .create_job(
            CreateJobRequest::new(
                customer.id(),
                template.id(),
                "IVA terzo trimestre",
                date(2026, 10, 15),
            )
            .with_assignees([member.id()]),
        )
        .await
        .expect("job creation should succeed");

    // Template steps plus the implicit billing step.
    assert_eq!(job.sub_tasks().len(), 3);
    assert_eq!(job.billing_state(), BillingState::NotInvoiced);

    let work_steps: Vec<_> = job
        .sub_tasks()
        .iter()
        .take(2)
        .map(|task| task.id())
        .collect();
    for step in work_steps {
        office
            .jobs
            .set_sub_task_done(job.id(), step, true)
            .await
            .expect("toggle should succeed");
    }

    let summary = office
        .dashboard
        .summary()
        .await
        .expect("summary should succeed");
    assert_eq!(summary.awaiting_invoice, 1);

    office
        .jobs
        .record_invoice(job.id(), Some("2026/041".to_owned()), date(2026, 9, 5))
        .await
        .expect("invoice should be recorded");

    let after_invoice = office
        .dashboard
        .summary()
        .await
        .expect("summary should succeed");
    assert_eq!(after_invoice.awaiting_invoice, 0);
    assert_eq!(after_invoice.awaiting_payment, 1);
    assert_eq!(after_invoice.completed, 1);

    let paid = office
        .jobs
        .record_payment(job.id(), date(2026, 9, 20))
        .await
        .expect("payment should be recorded");
    assert_eq!(paid.billing_state(), BillingState::Paid);

    let settled = office
        .dashboard
        .summary()
        .await
        .expect("summary should succeed");
    assert_eq!(settled.awaiting_payment, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_lists_a_new_job_under_its_status(office: Office) {
    let (customer, _, template) = seed_directory(&office.directory)
        .await
        .expect("directory seeding should succeed");
    // A deadline far enough out to sit outside any due-soon window.
    let far_off = chrono::Utc::now()
        .date_naive()
        .checked_add_days(chrono::Days::new(120))
        .expect("date should be representable");

    let job = office
        .jobs
        .create_job(CreateJobRequest::new(
            customer.id(),
            template.id(),
            "Bilancio 2026",
            far_off,
        ))
        .await
        .expect("job creation should succeed");

    let in_progress = office
        .dashboard
        .jobs_with_status(JobStatus::InProgress)
        .await
        .expect("query should succeed");

    assert_eq!(in_progress.len(), 1);
    assert_eq!(
        in_progress.first().map(commessa::job::domain::Job::id),
        Some(job.id())
    );
}
