//! Git source registration port definition.

use crate::domain::{AppError, GitSource};

/// Port for registering git sources with the Secure platform.
pub trait SourceRegistry {
    /// Register a single source. One call issues at most one request.
    fn register(&self, source: &GitSource) -> Result<(), AppError>;
}
