use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::commit::CommitRecord;
use crate::domain::repository::RepositoryRef;
use crate::domain::result::AccessFailure;

/// Branch assumed when the host cannot tell us the default branch.
pub const FALLBACK_BRANCH: &str = "main";

#[async_trait]
pub trait CommitHostService: Send + Sync {
    /// Default branch of `repo`, or [`FALLBACK_BRANCH`] when it cannot be
    /// determined. Never fails.
    async fn default_branch(&self, repo: &RepositoryRef) -> String;

    /// First page of commits on `branch` authored at or after `since`.
    async fn recent_commits(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CommitRecord>, AccessFailure>;
}
