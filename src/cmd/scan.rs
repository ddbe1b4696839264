use std::path::PathBuf;

use chrono::Utc;
use console::style;

use crate::context::AppContext;
use crate::domain::repository::read_repository_list;
use crate::domain::result::RepositoryStatus;
use crate::error::AppResult;
use crate::infra::report::{write_committer_report, write_repository_report};
use crate::workflow::scan::{ScanProgress, scan_repositories, since_cutoff};

#[derive(Debug, Clone)]
pub struct ScanCommandArgs {
    pub days: u32,
    pub repos_path: PathBuf,
    pub results_path: PathBuf,
    pub committers_path: PathBuf,
}

pub struct ScanSummary {
    pub repositories: usize,
    pub unique_committers: usize,
}

pub fn print_banner() {
    let title = concat!("gh-committers ", env!("CARGO_PKG_VERSION"));
    println!("{}", style(title).cyan().bold());
    println!(
        "{}",
        style("Active committers across GitHub repositories").yellow()
    );
    println!();
}

/// Scans every listed repository and writes both reports. Reports are only
/// written once the whole list has been processed.
pub async fn run(ctx: &AppContext, args: ScanCommandArgs) -> AppResult<ScanSummary> {
    let repos = read_repository_list(&args.repos_path)?;
    let since = since_cutoff(Utc::now(), args.days);
    tracing::info!(
        api_url = %ctx.config.api_url,
        repositories = repos.len(),
        days = args.days,
        %since,
        "starting scan"
    );

    let outcome = scan_repositories(ctx, &repos, since, print_progress).await;

    write_repository_report(&args.results_path, &outcome.results)?;
    write_committer_report(&args.committers_path, &outcome.committers)?;

    Ok(ScanSummary {
        repositories: outcome.results.len(),
        unique_committers: outcome.committers.len(),
    })
}

fn print_progress(progress: ScanProgress<'_>) {
    let result = progress.result;
    if let RepositoryStatus::Failed { .. } = &result.status {
        println!("{}", style(&result.status).red());
    }
    println!(
        "{}/{} Repository: {}, Active Committers: {}, Status: {}",
        progress.index,
        progress.total,
        result.repository,
        result.active_committers,
        result.status
    );
}
