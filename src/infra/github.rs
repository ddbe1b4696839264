use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{
    Client, ClientBuilder, RequestBuilder, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};

use crate::config::AppConfig;
use crate::domain::commit::{CommitRecord, RepositoryMetadata};
use crate::domain::repository::RepositoryRef;
use crate::domain::result::AccessFailure;
use crate::error::{AppError, AppResult};
use crate::services::{CommitHostService, FALLBACK_BRANCH};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_builder(Client::builder(), config)
    }

    fn with_builder(builder: ClientBuilder, config: &AppConfig) -> AppResult<Self> {
        let http = builder
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| AppError::HostApi(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
        })
    }

    fn repository_endpoint(&self, repo: &RepositoryRef) -> String {
        format!("{}/repos/{}", self.api_url, repo)
    }

    fn commits_endpoint(&self, repo: &RepositoryRef) -> String {
        format!("{}/repos/{}/commits", self.api_url, repo)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
    }

    async fn fetch_metadata(
        &self,
        repo: &RepositoryRef,
    ) -> Result<RepositoryMetadata, AccessFailure> {
        let url = self.repository_endpoint(repo);
        tracing::debug!(%url, "fetching repository metadata");

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|err| AccessFailure::Transport(format!("request failed: {err}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AccessFailure::Status(status.as_u16()));
        }

        response
            .json::<RepositoryMetadata>()
            .await
            .map_err(|err| AccessFailure::Transport(format!("invalid metadata: {err}")))
    }
}

/// ISO-8601 UTC instant with second precision, e.g. `2026-10-12T08:30:00Z`.
pub fn format_since(since: DateTime<Utc>) -> String {
    since.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl CommitHostService for GitHubClient {
    async fn default_branch(&self, repo: &RepositoryRef) -> String {
        match self.fetch_metadata(repo).await {
            Ok(RepositoryMetadata {
                default_branch: Some(branch),
            }) if !branch.trim().is_empty() => branch,
            Ok(_) => {
                tracing::warn!(
                    repository = %repo,
                    "metadata has no default branch, assuming {FALLBACK_BRANCH}"
                );
                FALLBACK_BRANCH.to_string()
            }
            Err(failure) => {
                tracing::warn!(
                    repository = %repo,
                    %failure,
                    "default branch lookup failed, assuming {FALLBACK_BRANCH}"
                );
                FALLBACK_BRANCH.to_string()
            }
        }
    }

    async fn recent_commits(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>, AccessFailure> {
        let url = self.commits_endpoint(repo);
        let since = format_since(since);
        tracing::debug!(%url, branch, %since, "fetching commit list");

        let response = self
            .get(&url)
            .query(&[("sha", branch), ("since", since.as_str())])
            .send()
            .await
            .map_err(|err| AccessFailure::Transport(format!("request failed: {err}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AccessFailure::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AccessFailure::Transport(format!("failed to read response: {err}")))?;

        serde_json::from_str(&body)
            .map_err(|err| AccessFailure::Transport(format!("invalid commit list: {err}")))
    }
}
