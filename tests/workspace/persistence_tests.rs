//! Snapshot checkpoint and hydrate round trips, including the JSON file
//! store.

use std::sync::Arc;

use super::helpers::{Office, date, office, office_with, seed_directory};
use camino::Utf8PathBuf;
use commessa::directory::{adapters::InMemoryDirectory, ports::CustomerRepository};
use commessa::job::{adapters::InMemoryJobRepository, services::CreateJobRequest};
use commessa::storage::{adapters::JsonFileStore, services::WorkspaceService};
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn checkpoint_hydrates_into_a_fresh_office(office: Office) {
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
    office
        .workspace
        .checkpoint()
        .await
        .expect("checkpoint should succeed");

    // A second office over the same store is the next program run.
    let restored = office_with(office.store.as_ref().clone());
    let hydrated = restored
        .workspace
        .hydrate()
        .await
        .expect("hydrate should succeed");

    assert!(hydrated);
    let fetched = restored
        .jobs
        .find_by_id(job.id())
        .await
        .expect("lookup should succeed")
        .expect("job should survive the round trip");
    assert_eq!(fetched, job);
    assert_eq!(
        restored
            .directory
            .list_customers()
            .await
            .expect("listing should succeed")
            .len(),
        1
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn json_file_store_round_trips_a_working_day() {
    let dir = TempDir::new().expect("temp dir should be created");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .expect("temp dir path should be UTF-8");

    let directory_store = Arc::new(InMemoryDirectory::new());
    let job_store = Arc::new(InMemoryJobRepository::new());
    let file_store =
        Arc::new(JsonFileStore::open(&root, "workspace.json").expect("store should open"));
    let workspace = WorkspaceService::new(
        Arc::clone(&directory_store),
        Arc::clone(&job_store),
        Arc::clone(&file_store),
    );

    let clock = Arc::new(mockable::DefaultClock);
    let directory = commessa::directory::services::DirectoryService::new(
        Arc::clone(&directory_store),
        Arc::clone(&job_store),
        Arc::clone(&clock),
    );
    let customer = directory
        .create_customer(commessa::directory::services::CreateCustomerRequest::new(
            "Rossi Srl",
        ))
        .await
        .expect("customer creation should succeed");
    workspace.checkpoint().await.expect("checkpoint should succeed");

    // Second run: a fresh set of stores over the same file.
    let fresh_directory = Arc::new(InMemoryDirectory::new());
    let fresh_jobs = Arc::new(InMemoryJobRepository::new());
    let reopened =
        Arc::new(JsonFileStore::open(&root, "workspace.json").expect("store should open"));
    let restored = WorkspaceService::new(Arc::clone(&fresh_directory), fresh_jobs, reopened);

    let hydrated = restored.hydrate().await.expect("hydrate should succeed");

    assert!(hydrated);
    let customers = fresh_directory
        .list_customers()
        .await
        .expect("listing should succeed");
    assert_eq!(customers, [customer]);
}
