//! Implementations of the ports against real services.

mod dry_run_registry;
mod github_http;
mod secure_http;

pub use dry_run_registry::DryRunSourceRegistry;
pub use github_http::HttpGitHubClient;
pub use secure_http::{GIT_SOURCES_PATH, HttpSecureClient, encode_source};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
