use std::fmt;

use crate::domain::committers::CommitterCounts;
use crate::domain::repository::RepositoryRef;

/// Why the commit list of a repository could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessFailure {
    /// The host answered with a non-200 status code.
    Status(u16),
    /// The request never produced a usable response body.
    Transport(String),
}

impl fmt::Display for AccessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessFailure::Status(code) => write!(f, "{code}"),
            AccessFailure::Transport(reason) => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryStatus {
    Success,
    Failed {
        repository: RepositoryRef,
        failure: AccessFailure,
    },
}

impl fmt::Display for RepositoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryStatus::Success => f.write_str("Success"),
            RepositoryStatus::Failed {
                repository,
                failure,
            } => write!(f, "Error accessing the repository {repository}: {failure}"),
        }
    }
}

/// Committers of one repository within the lookback window.
#[derive(Debug, Clone)]
pub struct RepositoryActivity {
    pub committers: CommitterCounts,
    pub status: RepositoryStatus,
}

/// One row of the per-repository report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryResult {
    pub repository: RepositoryRef,
    pub active_committers: usize,
    pub status: RepositoryStatus,
}
