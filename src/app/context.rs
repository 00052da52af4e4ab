use crate::ports::{RepositoryLister, SourceRegistry};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: RepositoryLister, R: SourceRegistry> {
    lister: L,
    registry: R,
}

impl<L: RepositoryLister, R: SourceRegistry> AppContext<L, R> {
    /// Create a new application context.
    pub fn new(lister: L, registry: R) -> Self {
        Self { lister, registry }
    }

    /// Get a reference to the repository lister.
    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Get a reference to the source registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }
}
