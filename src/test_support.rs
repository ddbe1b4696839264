use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::domain::commit::{CommitAuthor, CommitRecord};
use crate::domain::repository::RepositoryRef;
use crate::domain::result::AccessFailure;
use crate::services::{CommitHostService, FALLBACK_BRANCH};

pub fn test_config() -> AppConfig {
    AppConfig {
        github_token: "test-token".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        request_timeout: Duration::from_secs(1),
    }
}

/// Builds a commit list; `None` stands for a commit without a linked author.
pub fn commits(logins: &[Option<&str>]) -> Vec<CommitRecord> {
    logins
        .iter()
        .map(|login| CommitRecord {
            author: login.map(|login| CommitAuthor {
                login: login.to_string(),
            }),
        })
        .collect()
}

/// In-memory host answering from per-repository scripts. Repositories
/// without a scripted branch report [`FALLBACK_BRANCH`]; repositories without
/// a scripted commit list answer 404.
#[derive(Default)]
pub struct ScriptedHost {
    branches: HashMap<String, String>,
    listings: HashMap<String, Result<Vec<CommitRecord>, AccessFailure>>,
    calls: Mutex<Vec<CommitCall>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCall {
    pub repository: String,
    pub branch: String,
    pub since: DateTime<Utc>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch(mut self, repo: &str, branch: &str) -> Self {
        self.branches.insert(repo.to_string(), branch.to_string());
        self
    }

    pub fn with_commits(mut self, repo: &str, logins: &[Option<&str>]) -> Self {
        self.listings.insert(repo.to_string(), Ok(commits(logins)));
        self
    }

    pub fn with_failure(mut self, repo: &str, failure: AccessFailure) -> Self {
        self.listings.insert(repo.to_string(), Err(failure));
        self
    }

    pub fn calls(&self) -> Vec<CommitCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommitHostService for ScriptedHost {
    async fn default_branch(&self, repo: &RepositoryRef) -> String {
        self.branches
            .get(repo.as_str())
            .cloned()
            .unwrap_or_else(|| FALLBACK_BRANCH.to_string())
    }

    async fn recent_commits(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>, AccessFailure> {
        self.calls.lock().unwrap().push(CommitCall {
            repository: repo.to_string(),
            branch: branch.to_string(),
            since,
        });
        self.listings
            .get(repo.as_str())
            .cloned()
            .unwrap_or(Err(AccessFailure::Status(404)))
    }
}
