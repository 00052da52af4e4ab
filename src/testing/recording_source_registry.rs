use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::{AppError, GitSource};
use crate::ports::SourceRegistry;

/// Records every registration attempt; rejects the configured repositories.
#[derive(Default)]
pub struct RecordingSourceRegistry {
    pub rejected: HashSet<String>,
    pub attempts: Mutex<Vec<GitSource>>,
}

impl RecordingSourceRegistry {
    pub fn rejecting(repositories: &[&str]) -> Self {
        Self {
            rejected: repositories.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn attempted_repositories(&self) -> Vec<String> {
        self.attempts.lock().unwrap().iter().map(|s| s.repository.clone()).collect()
    }
}

impl SourceRegistry for RecordingSourceRegistry {
    fn register(&self, source: &GitSource) -> Result<(), AppError> {
        self.attempts.lock().unwrap().push(source.clone());
        if self.rejected.contains(&source.repository) {
            return Err(AppError::Api {
                api: "Secure",
                status: 400,
                body: format!("rejected {}", source.repository),
            });
        }
        Ok(())
    }
}
