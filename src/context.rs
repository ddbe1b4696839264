use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::CommitHostService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub commit_host: Arc<dyn CommitHostService>,
}

impl AppContext {
    pub fn new(config: AppConfig, commit_host: Arc<dyn CommitHostService>) -> Self {
        Self {
            config,
            commit_host,
        }
    }
}
