//! Secure git-sources registration client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use super::USER_AGENT;
use crate::domain::{AppError, GitSource};
use crate::ports::SourceRegistry;

/// Path of the registration endpoint relative to the Secure base URL.
pub const GIT_SOURCES_PATH: &str = "/api/cspm/v1/gitProvider/gitSources";
const API_NAME: &str = "Secure";

/// HTTP transport for the Secure git-sources endpoint.
///
/// The base URL is kept as configured and resolved on every call, so an
/// unusable `secure_url` fails each registration rather than the whole run.
#[derive(Clone)]
pub struct HttpSecureClient {
    api_token: String,
    secure_url: String,
    client: Client,
}

impl std::fmt::Debug for HttpSecureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSecureClient")
            .field("secure_url", &self.secure_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl HttpSecureClient {
    /// Create a client for the Secure instance at `secure_url`.
    pub fn new(api_token: String, secure_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_token, secure_url: secure_url.to_string(), client })
    }

    /// Registration endpoint. Trailing slashes on `secure_url` are ignored.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.secure_url.trim_end_matches('/'), GIT_SOURCES_PATH);
        Url::parse(&raw).map_err(|e| AppError::InvalidUrl {
            url: self.secure_url.clone(),
            reason: e.to_string(),
        })
    }
}

#[derive(Serialize)]
struct GitSourceEnvelope<'a> {
    source: &'a GitSource,
}

/// Serialize the request body sent for `source`.
pub fn encode_source(source: &GitSource) -> Result<String, AppError> {
    Ok(serde_json::to_string(&GitSourceEnvelope { source })?)
}

impl SourceRegistry for HttpSecureClient {
    fn register(&self, source: &GitSource) -> Result<(), AppError> {
        let body = encode_source(source)?;
        let endpoint = self.endpoint()?;

        let response = self
            .client
            .post(endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| AppError::Request {
                target: endpoint.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .unwrap_or_else(|e| format!("<failed to read response body: {}>", e));
        Err(AppError::Api { api: API_NAME, status: status.as_u16(), body })
    }
}
