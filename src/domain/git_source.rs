//! Git source registration payload.

use serde::Serialize;

use super::SyncConfig;

const SOURCE_NAME_SUFFIX: &str = "_source";

/// One repository as registered with the Secure git-sources endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    pub repository: String,
    pub folders: Vec<String>,
    pub pr_scan_branch_pattern: String,
    pub integration_id: String,
    /// Display name, always `{repository}_source`.
    pub name: String,
}

impl GitSource {
    /// Build the payload for `repository` from the shared run settings.
    pub fn for_repository(repository: &str, config: &SyncConfig) -> Self {
        Self {
            repository: repository.to_string(),
            folders: config.folders.clone(),
            pr_scan_branch_pattern: config.pr_scan_branch_pattern.clone(),
            integration_id: config.integration_id.clone(),
            name: source_name(repository),
        }
    }
}

/// Display name registered for a repository.
pub fn source_name(repository: &str) -> String {
    format!("{}{}", repository, SOURCE_NAME_SUFFIX)
}
