pub mod error;
pub mod geometry;
pub mod math;
pub mod workspace;

pub use error::{FreespaceError, Result};
pub use workspace::{Workspace, WorkspaceConfig};
