use super::encode_source;
use crate::domain::{AppError, GitSource};
use crate::ports::SourceRegistry;

/// Registry that prints the request body instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct DryRunSourceRegistry;

impl SourceRegistry for DryRunSourceRegistry {
    fn register(&self, source: &GitSource) -> Result<(), AppError> {
        let body = encode_source(source)?;
        println!("=== DRY RUN ===");
        println!("Would register {} as {}", source.repository, source.name);
        println!("  Body: {}", body);
        Ok(())
    }
}
