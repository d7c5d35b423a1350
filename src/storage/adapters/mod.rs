//! Adapter implementations of the snapshot store port.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemorySnapshotStore;
