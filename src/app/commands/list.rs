//! Repository discovery for the configured GitHub account.

use crate::domain::{AccountKind, AppError, SyncConfig};
use crate::ports::RepositoryLister;

/// Resolve the account kind and list its repositories.
///
/// An unknown account kind fails before the lister is invoked.
pub fn execute<L: RepositoryLister>(
    lister: &L,
    config: &SyncConfig,
) -> Result<Vec<String>, AppError> {
    let kind = account_kind(config)?;
    lister.list_repositories(kind, &config.account_name)
}

/// Parse the configured account kind.
pub fn account_kind(config: &SyncConfig) -> Result<AccountKind, AppError> {
    config.account_type.parse()
}
