use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("repository list error: {0}")]
    RepositoryList(String),
    #[error("host API error: {0}")]
    HostApi(String),
    #[error("report error: {0}")]
    Report(String),
}

impl AppError {
    /// Process exit code reported by `main` for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Configuration(_) => 2,
            AppError::RepositoryList(_) => 3,
            AppError::Report(_) => 4,
            AppError::HostApi(_) => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
