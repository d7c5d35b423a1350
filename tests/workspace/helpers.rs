//! Shared test helpers for workspace integration tests.

use std::sync::Arc;

use commessa::dashboard::DashboardService;
use commessa::directory::{
    adapters::InMemoryDirectory,
    domain::{Customer, ServiceTemplate, StaffMember},
    services::{CreateCustomerRequest, CreateStaffRequest, CreateTemplateRequest, DirectoryService},
};
use commessa::job::{adapters::InMemoryJobRepository, services::JobLifecycleService};
use commessa::storage::{adapters::InMemorySnapshotStore, services::WorkspaceService};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;

pub type Directory = DirectoryService<InMemoryDirectory, InMemoryJobRepository, DefaultClock>;
pub type Jobs = JobLifecycleService<InMemoryJobRepository, InMemoryDirectory, DefaultClock>;
pub type Dashboard = DashboardService<InMemoryJobRepository, DefaultClock>;
pub type Workspace =
    WorkspaceService<InMemoryDirectory, InMemoryJobRepository, InMemorySnapshotStore>;

/// Every service wired over one shared pair of in-memory stores, the way
/// the application assembles them at startup.
pub struct Office {
    pub directory: Directory,
    pub jobs: Jobs,
    pub dashboard: Dashboard,
    pub workspace: Workspace,
    pub store: Arc<InMemorySnapshotStore>,
}

/// Provides a freshly wired set of services for each test.
#[fixture]
pub fn office() -> Office {
    office_with(InMemorySnapshotStore::new())
}

/// Wires the services over a caller-supplied snapshot store.
pub fn office_with(store: InMemorySnapshotStore) -> Office {
    let directory_store = Arc::new(InMemoryDirectory::new());
    let job_store = Arc::new(InMemoryJobRepository::new());
    let snapshot_store = Arc::new(store);
    let clock = Arc::new(DefaultClock);
    Office {
        directory: DirectoryService::new(
            Arc::clone(&directory_store),
            Arc::clone(&job_store),
            Arc::clone(&clock),
        ),
        jobs: JobLifecycleService::new(
            Arc::clone(&job_store),
            Arc::clone(&directory_store),
            Arc::clone(&clock),
        ),
        dashboard: DashboardService::new(Arc::clone(&job_store), clock),
        workspace: WorkspaceService::new(
            directory_store,
            job_store,
            Arc::clone(&snapshot_store),
        ),
        store: snapshot_store,
    }
}

/// Builds a date, panicking on nonsense input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Stores a customer, a staff member, and a two-step template.
///
/// # Errors
///
/// Returns an error if any creation fails.
pub async fn seed_directory(
    directory: &Directory,
) -> Result<(Customer, StaffMember, ServiceTemplate), Box<dyn std::error::Error + Send + Sync>> {
    let customer = directory
        .create_customer(
            CreateCustomerRequest::new("Rossi Srl").with_notes("paga a 60 giorni"),
        )
        .await?;
    let member = directory
        .create_staff(CreateStaffRequest::new("Giulia Ferri").with_role("contabile"))
        .await?;
    let template = directory
        .create_template(CreateTemplateRequest::new("Dichiarazione IVA").with_steps([
            "Raccolta documenti".to_owned(),
            "Invio telematico".to_owned(),
        ]))
        .await?;
    Ok((customer, member, template))
}
