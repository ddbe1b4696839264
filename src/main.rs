mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
#[cfg(test)]
mod test_support;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use console::style;

use crate::cmd::scan::{self, ScanCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::github::GitHubClient;

#[derive(Parser)]
#[command(
    name = "gh-committers",
    author,
    version,
    about = "Counts unique active committers across GitHub repositories"
)]
struct Cli {
    /// Number of days of commit activity to inspect.
    #[arg(short, long)]
    days: u32,
    /// YAML settings file holding `github_token`.
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
    /// Repository list, one `owner/name` or URL per line.
    #[arg(short, long, default_value = "repositories.txt")]
    repos: PathBuf,
    /// Per-repository report.
    #[arg(long, default_value = "results.csv")]
    results: PathBuf,
    /// Per-user commit totals.
    #[arg(long, default_value = "committers.csv")]
    committers: PathBuf,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    scan::print_banner();

    let config = AppConfig::load(&cli.config)?;
    let commit_host = Arc::new(GitHubClient::new(&config)?);
    let context = AppContext::new(config, commit_host);

    let args = ScanCommandArgs {
        days: cli.days,
        repos_path: cli.repos,
        results_path: cli.results,
        committers_path: cli.committers,
    };
    let summary = scan::run(&context, args.clone()).await?;

    println!("Results written to file {}", args.results_path.display());
    println!(
        "Committers written to the file {}",
        args.committers_path.display()
    );
    println!(
        "Total unique committers: {}",
        style(summary.unique_committers).green().bold()
    );
    println!();
    println!(
        "Scanned {} repositories over the last {} days.",
        summary.repositories, args.days
    );

    Ok(())
}
