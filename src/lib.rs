//! Commessa: back-office job tracking for a small service business.
//!
//! This crate provides the core functionality for tracking customer jobs,
//! the sub-tasks that compose each job, staff assignments, and billing
//! state, with the whole workspace persisted as a single snapshot blob.
//!
//! # Architecture
//!
//! Commessa follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory, etc.)
//!
//! # Modules
//!
//! - [`directory`]: Customers, staff, and service templates jobs refer to
//! - [`job`]: Job aggregate, sub-task completion, and billing lifecycle
//! - [`dashboard`]: Derived aggregates and deadline-driven views
//! - [`storage`]: Whole-workspace snapshot persistence

pub mod dashboard;
pub mod directory;
pub mod job;
pub mod storage;
