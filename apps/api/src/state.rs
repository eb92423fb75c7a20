use std::sync::Arc;

use crate::analysis::roadmap::DifficultyTiers;
use crate::config::Config;
use crate::llm_client::ChatCompleter;
use crate::session::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Current-analysis storage. Redis when `REDIS_URL` is set, in-process otherwise.
    pub store: Arc<dyn AnalysisStore>,
    /// `None` when no API key is configured; the advisor falls back to a static answer.
    pub chat: Option<Arc<dyn ChatCompleter>>,
    pub tiers: Arc<DifficultyTiers>,
}
