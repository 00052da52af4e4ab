pub mod account;
pub mod config;
pub mod error;
pub mod git_source;

pub use account::AccountKind;
pub use config::{ConfigFile, DEFAULT_GITHUB_API_URL, SyncConfig};
pub use error::AppError;
pub use git_source::{GitSource, source_name};
