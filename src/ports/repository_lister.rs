//! Repository listing port definition.

use crate::domain::{AccountKind, AppError};

/// Port for discovering the repositories of a GitHub account.
pub trait RepositoryLister {
    /// Return repository names in the order the remote API reports them.
    ///
    /// `account_name` is only consulted for [`AccountKind::Org`].
    fn list_repositories(
        &self,
        kind: AccountKind,
        account_name: &str,
    ) -> Result<Vec<String>, AppError>;
}
