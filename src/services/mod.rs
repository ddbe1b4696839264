pub mod commit_host;

pub use commit_host::{CommitHostService, FALLBACK_BRANCH};
