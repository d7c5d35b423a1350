//! Application services for workspace persistence.

mod workspace;

pub use workspace::{WorkspaceError, WorkspaceResult, WorkspaceService};
