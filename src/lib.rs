//! gitsource-sync: register a GitHub account's repositories as Secure git sources.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{DryRunSourceRegistry, HttpGitHubClient, HttpSecureClient};
use app::{AppContext, commands, config::load_config};

pub use app::commands::sync::{RegistrationOutcome, RegistrationStatus, SyncOptions, SyncReport};
pub use domain::{AccountKind, AppError, GitSource, SyncConfig};

/// Load the config at `config_path` and register every listed repository.
///
/// Fails only when the config cannot be loaded or the listing fails;
/// per-repository registration failures are recorded in the report.
pub fn sync(config_path: &Path, options: SyncOptions) -> Result<SyncReport, AppError> {
    let config = load_config(config_path)?;
    let lister = HttpGitHubClient::new(config.github_token.clone(), &config.github_api_url)?;

    if options.dry_run {
        let ctx = AppContext::new(lister, DryRunSourceRegistry);
        return commands::sync::execute(&ctx, &config, options);
    }

    let registry = HttpSecureClient::new(config.secure_api_token.clone(), &config.secure_url)?;
    let ctx = AppContext::new(lister, registry);
    commands::sync::execute(&ctx, &config, options)
}

/// Load the config at `config_path` and return the repository names that a
/// sync would register.
pub fn list_repositories(config_path: &Path) -> Result<Vec<String>, AppError> {
    let config = load_config(config_path)?;
    let lister = HttpGitHubClient::new(config.github_token.clone(), &config.github_api_url)?;
    commands::list::execute(&lister, &config)
}
