mod fake_repository_lister;
mod recording_source_registry;

pub use fake_repository_lister::FakeRepositoryLister;
pub use recording_source_registry::RecordingSourceRegistry;
