//! Referential-integrity guards exercised across the directory and job
//! services.

use super::helpers::{Office, date, office, seed_directory};
use commessa::directory::services::DirectoryServiceError;
use commessa::job::services::CreateJobRequest;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn referenced_records_cannot_be_deleted_until_the_job_goes(office: Office) {
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

    assert!(matches!(
        office.directory.delete_customer(customer.id()).await,
        Err(DirectoryServiceError::CustomerInUse { jobs: 1, .. })
    ));
    assert!(matches!(
        office.directory.delete_staff(member.id()).await,
        Err(DirectoryServiceError::StaffInUse { jobs: 1, .. })
    ));
    assert!(matches!(
        office.directory.delete_template(template.id()).await,
        Err(DirectoryServiceError::TemplateInUse { jobs: 1, .. })
    ));

    office
        .jobs
        .delete_job(job.id())
        .await
        .expect("job deletion should succeed");

    office
        .directory
        .delete_customer(customer.id())
        .await
        .expect("customer deletion should succeed once unreferenced");
    office
        .directory
        .delete_staff(member.id())
        .await
        .expect("staff deletion should succeed once unreferenced");
    office
        .directory
        .delete_template(template.id())
        .await
        .expect("template deletion should succeed once unreferenced");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassigning_a_job_releases_the_old_assignee(office: Office) {
    let (customer, member, template) = seed_directory(&office.directory)
        .await
        .expect("directory seeding should succeed");
    let replacement = office
        .directory
        .create_staff(commessa::directory::services::CreateStaffRequest::new(
            "Marco Esposito",
        ))
        .await
        .expect("staff creation should succeed");
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

    office
        .jobs
        .set_assignees(job.id(), vec![replacement.id()])
        .await
        .expect("reassignment should succeed");

    office
        .directory
        .delete_staff(member.id())
        .await
        .expect("old assignee should be deletable after reassignment");
    assert!(matches!(
        office.directory.delete_staff(replacement.id()).await,
        Err(DirectoryServiceError::StaffInUse { jobs: 1, .. })
    ));
}
