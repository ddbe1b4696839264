use std::path::Path;

use csv::{Terminator, Writer, WriterBuilder};

use crate::domain::committers::CommitterCounts;
use crate::domain::result::RepositoryResult;
use crate::error::{AppError, AppResult};

const RESULTS_HEADER: [&str; 3] = ["Repository", "Active Committers", "Status"];
const COMMITTERS_HEADER: [&str; 2] = ["User", "Number of Commits"];

/// Overwrites `path` with one row per processed repository, in processing
/// order.
pub fn write_repository_report(path: &Path, results: &[RepositoryResult]) -> AppResult<()> {
    let mut writer = open(path)?;
    write_row(&mut writer, path, RESULTS_HEADER)?;
    for result in results {
        write_row(
            &mut writer,
            path,
            [
                result.repository.to_string(),
                result.active_committers.to_string(),
                result.status.to_string(),
            ],
        )?;
    }
    finish(writer, path)
}

/// Overwrites `path` with one row per committer, ordered by login.
pub fn write_committer_report(path: &Path, committers: &CommitterCounts) -> AppResult<()> {
    let mut writer = open(path)?;
    write_row(&mut writer, path, COMMITTERS_HEADER)?;
    for (login, commits) in committers.iter() {
        write_row(&mut writer, path, [login.to_string(), commits.to_string()])?;
    }
    finish(writer, path)
}

fn open(path: &Path) -> AppResult<Writer<std::fs::File>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(path)
        .map_err(|err| report_error(path, err))
}

fn write_row<I, T>(writer: &mut Writer<std::fs::File>, path: &Path, row: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer
        .write_record(row)
        .map_err(|err| report_error(path, err))
}

fn finish(mut writer: Writer<std::fs::File>, path: &Path) -> AppResult<()> {
    writer
        .flush()
        .map_err(|err| AppError::Report(format!("cannot write {}: {err}", path.display())))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

fn report_error(path: &Path, err: csv::Error) -> AppError {
    AppError::Report(format!("cannot write {}: {err}", path.display()))
}
