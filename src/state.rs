use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::ArticleSource;

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub source: Arc<dyn ArticleSource>,
}

impl AppState {
    pub fn new(config: AppConfig, source: Arc<dyn ArticleSource>) -> Self {
        AppState { config, source }
    }
}
