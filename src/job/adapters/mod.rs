//! Adapter implementations of the job ports.

pub mod memory;

pub use memory::InMemoryJobRepository;
