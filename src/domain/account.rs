//! GitHub account kind selection.

use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Whether the GitHub target is a personal user account or an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Repositories of the authenticated user.
    User,
    /// Repositories of a named organization.
    Org,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::User => "user",
            AccountKind::Org => "org",
        }
    }
}

impl FromStr for AccountKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(AccountKind::User),
            "org" => Ok(AccountKind::Org),
            other => Err(AppError::InvalidAccountKind(other.to_string())),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
