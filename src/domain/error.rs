use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for gitsource-sync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid YAML or does not match the expected shape.
    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Account kind is neither `user` nor `org`.
    #[error("Invalid account type '{0}': must be 'user' or 'org'")]
    InvalidAccountKind(String),

    /// A base URL from the config could not be turned into an endpoint.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client construction failed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Transport-level failure (connection refused, TLS, reading the body).
    #[error("Request to {target} failed: {message}")]
    Request { target: String, message: String },

    /// Remote API answered with a non-success status.
    #[error("{api} API request failed ({status}): {body}")]
    Api { api: &'static str, status: u16, body: String },

    /// Remote API answered with a success status but an unexpected body.
    #[error("Failed to decode {api} API response: {details}")]
    Decode { api: &'static str, details: String },

    /// Registration payload could not be serialized.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
