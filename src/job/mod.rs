//! Job lifecycle management: the unit of work tracked for a customer.
//!
//! A job is instantiated from a service template, carries a deadline and a
//! list of sub-tasks, and always ends with the implicit billing step
//! ("Fatturazione"). Status labels are derived from the deadline and
//! sub-task completion rather than stored. The module follows hexagonal
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
