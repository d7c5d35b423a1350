//! Read-side services for dashboard aggregates and filters.

mod summary;

pub use summary::{DashboardError, DashboardResult, DashboardService, DashboardSummary, JobFilter};
