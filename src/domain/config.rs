//! Sync configuration model.
//!
//! Mirrors the `config:` block of `config.yaml`. Only the root key is
//! structurally required; empty or missing values surface later as API
//! failures.

use serde::{Deserialize, Deserializer};

/// Default GitHub REST API base.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Top-level document shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub config: SyncConfig,
}

/// Settings for a single sync run.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub secure_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secure_api_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github_token: String,
    #[serde(rename = "accountType", deserialize_with = "null_as_default")]
    pub account_type: String,
    #[serde(rename = "accountName", deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(rename = "integrationId", deserialize_with = "null_as_default")]
    pub integration_id: String,
    #[serde(rename = "prScanBranchPattern", deserialize_with = "null_as_default")]
    pub pr_scan_branch_pattern: String,
    #[serde(deserialize_with = "null_as_default")]
    pub folders: Vec<String>,
    #[serde(rename = "githubApiUrl", deserialize_with = "blank_as_default_api_url")]
    pub github_api_url: String,
}

/// Treat an explicit YAML `null` (e.g. `accountName:`) like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_default_api_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()))
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            secure_url: String::new(),
            secure_api_token: String::new(),
            github_token: String::new(),
            account_type: String::new(),
            account_name: String::new(),
            integration_id: String::new(),
            pr_scan_branch_pattern: String::new(),
            folders: Vec::new(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncConfig")
            .field("secure_url", &self.secure_url)
            .field("secure_api_token", &"[REDACTED]")
            .field("github_token", &"[REDACTED]")
            .field("account_type", &self.account_type)
            .field("account_name", &self.account_name)
            .field("integration_id", &self.integration_id)
            .field("pr_scan_branch_pattern", &self.pr_scan_branch_pattern)
            .field("folders", &self.folders)
            .field("github_api_url", &self.github_api_url)
            .finish()
    }
}
