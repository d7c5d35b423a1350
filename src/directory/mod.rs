//! Reference records for the back office: customers, staff, and service
//! templates.
//!
//! Jobs hold directory records by id, so deletion is guarded by referential
//! integrity checks: a customer, staff member, or template still referenced
//! by at least one job cannot be removed. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
