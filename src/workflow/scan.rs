use chrono::{DateTime, TimeDelta, Utc};

use crate::context::AppContext;
use crate::domain::commit::CommitRecord;
use crate::domain::committers::CommitterCounts;
use crate::domain::repository::RepositoryRef;
use crate::domain::result::{RepositoryActivity, RepositoryResult, RepositoryStatus};
use crate::services::CommitHostService;

/// Progress notification emitted after each repository.
pub struct ScanProgress<'a> {
    pub index: usize,
    pub total: usize,
    pub result: &'a RepositoryResult,
}

pub struct ScanOutcome {
    pub results: Vec<RepositoryResult>,
    pub committers: CommitterCounts,
}

/// Start of the lookback window. Clamps to the earliest representable
/// instant instead of overflowing.
pub fn since_cutoff(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(TimeDelta::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Tallies commits per author login, skipping commits without a linked
/// author.
pub fn count_committers(commits: &[CommitRecord]) -> CommitterCounts {
    commits.iter().filter_map(CommitRecord::author_login).collect()
}

pub async fn active_committers(
    host: &dyn CommitHostService,
    repo: &RepositoryRef,
    since: DateTime<Utc>,
) -> RepositoryActivity {
    let branch = host.default_branch(repo).await;

    match host.recent_commits(repo, &branch, since).await {
        Ok(commits) => RepositoryActivity {
            committers: count_committers(&commits),
            status: RepositoryStatus::Success,
        },
        Err(failure) => RepositoryActivity {
            committers: CommitterCounts::new(),
            status: RepositoryStatus::Failed {
                repository: repo.clone(),
                failure,
            },
        },
    }
}

/// Visits every repository in order, one request at a time, folding each
/// repository's committers into the global tally.
pub async fn scan_repositories<F>(
    ctx: &AppContext,
    repos: &[RepositoryRef],
    since: DateTime<Utc>,
    mut on_progress: F,
) -> ScanOutcome
where
    F: FnMut(ScanProgress<'_>),
{
    let total = repos.len();
    let mut results = Vec::with_capacity(total);
    let mut committers = CommitterCounts::new();

    for (offset, repo) in repos.iter().enumerate() {
        let activity = active_committers(ctx.commit_host.as_ref(), repo, since).await;
        if activity.committers.is_empty() {
            tracing::debug!(repository = %repo, "no qualifying commits");
        }
        committers.merge(&activity.committers);

        results.push(RepositoryResult {
            repository: repo.clone(),
            active_committers: activity.committers.len(),
            status: activity.status,
        });
        if let Some(result) = results.last() {
            on_progress(ScanProgress {
                index: offset + 1,
                total,
                result,
            });
        }
    }

    ScanOutcome {
        results,
        committers,
    }
}
