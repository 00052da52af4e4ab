mod repository_lister;
mod source_registry;

pub use repository_lister::RepositoryLister;
pub use source_registry::SourceRegistry;
