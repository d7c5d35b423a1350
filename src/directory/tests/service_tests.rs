//! Service orchestration tests for directory CRUD and delete guards.

use std::sync::Arc;

use crate::directory::{
    adapters::InMemoryDirectory,
    domain::{ContactDetails, CustomerId},
    ports::{DirectoryRepositoryError, JobReferenceError, JobReferenceIndex, JobReferenceResult},
    services::{
        CreateCustomerRequest, CreateStaffRequest, CreateTemplateRequest, DirectoryService,
        DirectoryServiceError,
    },
};
use crate::job::{
    adapters::InMemoryJobRepository,
    services::{CreateJobRequest, JobLifecycleService},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type Directory = DirectoryService<InMemoryDirectory, InMemoryJobRepository, DefaultClock>;
type Jobs = JobLifecycleService<InMemoryJobRepository, InMemoryDirectory, DefaultClock>;

/// Directory and job services wired over shared in-memory stores.
struct Harness {
    directory: Directory,
    jobs: Jobs,
}

#[fixture]
fn harness() -> Harness {
    let directory_store = Arc::new(InMemoryDirectory::new());
    let job_store = Arc::new(InMemoryJobRepository::new());
    let clock = Arc::new(DefaultClock);
    Harness {
        directory: DirectoryService::new(
            Arc::clone(&directory_store),
            Arc::clone(&job_store),
            Arc::clone(&clock),
        ),
        jobs: JobLifecycleService::new(job_store, directory_store, clock),
    }
}

fn deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_customer_persists_and_is_retrievable(harness: Harness) {
    let request = CreateCustomerRequest::new("Rossi Srl")
        .with_contact(ContactDetails::new().with_email("amministrazione@rossi.it"))
        .with_notes("paga a 60 giorni");

    let created = harness
        .directory
        .create_customer(request)
        .await
        .expect("customer creation should succeed");
    let fetched = harness
        .directory
        .find_customer(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(created.notes(), Some("paga a 60 giorni"));
    assert_eq!(
        created.contact().and_then(ContactDetails::email),
        Some("amministrazione@rossi.it")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_customer_rejects_blank_name(harness: Harness) {
    let result = harness
        .directory
        .create_customer(CreateCustomerRequest::new("   "))
        .await;

    assert!(matches!(result, Err(DirectoryServiceError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_customers_sorts_by_name_case_insensitively(harness: Harness) {
    for name in ["verdi Snc", "Bianchi & Figli", "Rossi Srl"] {
        harness
            .directory
            .create_customer(CreateCustomerRequest::new(name))
            .await
            .expect("customer creation should succeed");
    }

    let customers = harness
        .directory
        .list_customers()
        .await
        .expect("listing should succeed");
    let names: Vec<&str> = customers.iter().map(|c| c.name().as_str()).collect();

    assert_eq!(names, ["Bianchi & Figli", "Rossi Srl", "verdi Snc"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rename_missing_customer_reports_not_found(harness: Harness) {
    let missing = CustomerId::new();

    let result = harness.directory.rename_customer(missing, "Rossi Spa").await;

    assert!(matches!(
        result,
        Err(DirectoryServiceError::Repository(
            DirectoryRepositoryError::CustomerNotFound(id)
        )) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_customer_without_jobs_succeeds(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");

    harness
        .directory
        .delete_customer(customer.id())
        .await
        .expect("deletion should succeed");

    let fetched = harness
        .directory
        .find_customer(customer.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_customer_with_jobs_is_refused(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");
    let template = harness
        .directory
        .create_template(CreateTemplateRequest::new("Dichiarazione IVA"))
        .await
        .expect("template creation should succeed");
    let job = harness
        .jobs
        .create_job(CreateJobRequest::new(
            customer.id(),
            template.id(),
            "IVA terzo trimestre",
            deadline(),
        ))
        .await
        .expect("job creation should succeed");

    let refused = harness.directory.delete_customer(customer.id()).await;
    assert!(matches!(
        refused,
        Err(DirectoryServiceError::CustomerInUse { jobs: 1, .. })
    ));

    // Removing the job unblocks the deletion.
    harness
        .jobs
        .delete_job(job.id())
        .await
        .expect("job deletion should succeed");
    harness
        .directory
        .delete_customer(customer.id())
        .await
        .expect("deletion should succeed once no job remains");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_staff_with_assignments_is_refused(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");
    let template = harness
        .directory
        .create_template(CreateTemplateRequest::new("Dichiarazione IVA"))
        .await
        .expect("template creation should succeed");
    let member = harness
        .directory
        .create_staff(CreateStaffRequest::new("Giulia Ferri").with_role("contabile"))
        .await
        .expect("staff creation should succeed");
    harness
        .jobs
        .create_job(
            CreateJobRequest::new(
                customer.id(),
                template.id(),
                "IVA terzo trimestre",
                deadline(),
            )
            .with_assignees([member.id()]),
        )
        .await
        .expect("job creation should succeed");

    let refused = harness.directory.delete_staff(member.id()).await;

    assert!(matches!(
        refused,
        Err(DirectoryServiceError::StaffInUse { jobs: 1, .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivate_staff_with_assignments_is_allowed(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");
    let template = harness
        .directory
        .create_template(CreateTemplateRequest::new("Dichiarazione IVA"))
        .await
        .expect("template creation should succeed");
    let member = harness
        .directory
        .create_staff(CreateStaffRequest::new("Giulia Ferri"))
        .await
        .expect("staff creation should succeed");
    harness
        .jobs
        .create_job(
            CreateJobRequest::new(
                customer.id(),
                template.id(),
                "IVA terzo trimestre",
                deadline(),
            )
            .with_assignees([member.id()]),
        )
        .await
        .expect("job creation should succeed");

    let deactivated = harness
        .directory
        .deactivate_staff(member.id())
        .await
        .expect("deactivation should succeed despite assignments");

    assert!(!deactivated.is_active());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_template_with_jobs_is_refused(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");
    let template = harness
        .directory
        .create_template(CreateTemplateRequest::new("Dichiarazione IVA"))
        .await
        .expect("template creation should succeed");
    harness
        .jobs
        .create_job(CreateJobRequest::new(
            customer.id(),
            template.id(),
            "IVA terzo trimestre",
            deadline(),
        ))
        .await
        .expect("job creation should succeed");

    let refused = harness.directory.delete_template(template.id()).await;

    assert!(matches!(
        refused,
        Err(DirectoryServiceError::TemplateInUse { jobs: 1, .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_template_rejects_reserved_step_name(harness: Harness) {
    let request = CreateTemplateRequest::new("Dichiarazione IVA")
        .with_steps(["Raccolta documenti".to_owned(), "fatturazione".to_owned()]);

    let result = harness.directory.create_template(request).await;

    assert!(matches!(result, Err(DirectoryServiceError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_template_steps_leaves_existing_jobs_untouched(harness: Harness) {
    let customer = harness
        .directory
        .create_customer(CreateCustomerRequest::new("Rossi Srl"))
        .await
        .expect("customer creation should succeed");
    let template = harness
        .directory
        .create_template(
            CreateTemplateRequest::new("Dichiarazione IVA")
                .with_steps(["Raccolta documenti".to_owned()]),
        )
        .await
        .expect("template creation should succeed");
    let job = harness
        .jobs
        .create_job(CreateJobRequest::new(
            customer.id(),
            template.id(),
            "IVA terzo trimestre",
            deadline(),
        ))
        .await
        .expect("job creation should succeed");

    harness
        .directory
        .set_template_steps(template.id(), vec!["Invio telematico".to_owned()])
        .await
        .expect("step replacement should succeed");

    let fetched = harness
        .jobs
        .find_by_id(job.id())
        .await
        .expect("lookup should succeed")
        .expect("job should still exist");
    let step_names: Vec<&str> = fetched.sub_tasks().iter().map(|task| task.name()).collect();
    assert_eq!(step_names, ["Raccolta documenti", "Fatturazione"]);
}

mockall::mock! {
    ReferenceIndex {}

    #[async_trait]
    impl JobReferenceIndex for ReferenceIndex {
        async fn jobs_for_customer(&self, id: CustomerId) -> JobReferenceResult<usize>;
        async fn jobs_for_template(
            &self,
            id: crate::directory::domain::ServiceTemplateId,
        ) -> JobReferenceResult<usize>;
        async fn jobs_for_staff(
            &self,
            id: crate::directory::domain::StaffId,
        ) -> JobReferenceResult<usize>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_customer_surfaces_reference_index_failures() {
    let directory_store = Arc::new(InMemoryDirectory::new());
    let clock = Arc::new(DefaultClock);
    let mut index = MockReferenceIndex::new();
    index.expect_jobs_for_customer().returning(|_| {
        Err(JobReferenceError::persistence(std::io::Error::other(
            "index unavailable",
        )))
    });
    let service = DirectoryService::new(directory_store, Arc::new(index), clock);

    let result = service.delete_customer(CustomerId::new()).await;

    assert!(matches!(
        result,
        Err(DirectoryServiceError::References(
            JobReferenceError::Persistence(_)
        ))
    ));
}
