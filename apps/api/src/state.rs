use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::pipeline::{AnalysisCache, RephraseCache};
use crate::gatherer::fetcher::PageFetcher;
use crate::llm_client::CompletionClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion adapter. Production: `LlmClient`; tests swap in a scripted fake.
    pub llm: Arc<dyn CompletionClient>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub analysis_cache: Arc<AnalysisCache>,
    pub rephrase_cache: Arc<RephraseCache>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(
        config: Config,
        llm: Arc<dyn CompletionClient>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        let session_ttl = chrono::Duration::seconds(config.session_ttl_secs as i64);
        Self {
            config,
            llm,
            fetcher,
            analysis_cache: Arc::new(AnalysisCache::new()),
            rephrase_cache: Arc::new(RephraseCache::new()),
            sessions: Arc::new(SessionStore::new(session_ttl)),
        }
    }
}
