//! Application state shared across all handlers.

use jsmin_filter::{FilterConfig, ScriptFilter};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub filter: Arc<ScriptFilter>,
    pub start_time: std::time::Instant,
}

impl AppState {
    /// State whose filter runs on every path.
    pub fn new() -> Self {
        Self::with_filter(ScriptFilter::allow_all())
    }

    pub fn with_filter(filter: ScriptFilter) -> Self {
        Self {
            filter: Arc::new(filter),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn from_config(config: &FilterConfig) -> jsmin_filter::Result<Self> {
        Ok(Self::with_filter(ScriptFilter::new(config)?))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
