//! GitHub repository listing over the REST API using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use url::Url;

use super::USER_AGENT;
use crate::domain::{AccountKind, AppError};
use crate::ports::RepositoryLister;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const API_NAME: &str = "GitHub";

/// HTTP transport for the GitHub repository listing endpoints.
///
/// Issues exactly one request per call and reads only the first page the API
/// returns.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a client for the API rooted at `api_url`.
    pub fn new(token: String, api_url: &str) -> Result<Self, AppError> {
        let api_url = Url::parse(api_url).map_err(|e| AppError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { token, api_url, client })
    }

    /// Resolve the listing endpoint for an account.
    pub fn endpoint(&self, kind: AccountKind, account_name: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| AppError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "cannot be used as a base URL".into(),
            })?;
            segments.pop_if_empty();
            match kind {
                AccountKind::User => segments.extend(["user", "repos"]),
                AccountKind::Org => segments.extend(["orgs", account_name, "repos"]),
            };
        }
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryDto {
    name: String,
}

impl RepositoryLister for HttpGitHubClient {
    fn list_repositories(
        &self,
        kind: AccountKind,
        account_name: &str,
    ) -> Result<Vec<String>, AppError> {
        let url = self.endpoint(kind, account_name)?;

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .map_err(|e| AppError::Request { target: url.to_string(), message: e.to_string() })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::Request { target: url.to_string(), message: e.to_string() })?;

        if !status.is_success() {
            return Err(AppError::Api { api: API_NAME, status: status.as_u16(), body });
        }

        let repos: Vec<RepositoryDto> = serde_json::from_str(&body)
            .map_err(|e| AppError::Decode { api: API_NAME, details: e.to_string() })?;

        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }
}
