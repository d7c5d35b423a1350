//! Derived dashboard views over the job store.
//!
//! Everything here is computed on read: per-status counts, billing queues,
//! deadline windows, and filtered listings. Nothing is cached or stored.

pub mod services;

pub use services::{DashboardService, DashboardSummary, JobFilter};

#[cfg(test)]
mod tests;
