use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings as they appear in the YAML file.
#[derive(Debug, Default, Deserialize)]
pub struct StoredConfig {
    pub github_token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl StoredConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => {
                AppError::Configuration(format!("{} not found", path.display()))
            }
            _ => AppError::Configuration(format!("cannot read {}: {err}", path.display())),
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> AppResult<Self> {
        // An empty document deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|err| AppError::Configuration(format!("invalid config file: {err}")))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: String,
    pub api_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let config = Self::from_stored(StoredConfig::load(path)?)?;
        tracing::debug!(
            path = %path.display(),
            token = %mask_secret(&config.github_token),
            api_url = %config.api_url,
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn from_stored(stored: StoredConfig) -> AppResult<Self> {
        let github_token = stored
            .github_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Configuration("github_token not configured".to_string()))?;

        let api_url = stored
            .api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = stored.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            github_token,
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

pub fn mask_secret(token: &str) -> String {
    match token {
        token if token.len() > 6 && token.is_ascii() => {
            let prefix = &token[..3];
            let suffix = &token[token.len() - 3..];
            format!("{prefix}***{suffix}")
        }
        token if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
