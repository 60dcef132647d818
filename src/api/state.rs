use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::data::candidate_pool;
use crate::error::AppResult;
use crate::models::RecommendationCandidate;
use crate::services::SessionStore;
use crate::store::{
    FileSessionSlot, InMemoryProfileStore, MemorySessionSlot, ProfileStore, SessionSlot,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub sessions: Arc<SessionStore>,
    pub pool: Arc<Vec<RecommendationCandidate>>,
    pub config: Arc<Config>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Demo state: seeded profiles, the fixed pool, sessions held in memory
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(InMemoryProfileStore::seeded()),
            Arc::new(MemorySessionSlot::new()),
            Config::default(),
        )
    }

    /// State built from configuration. The session slot is file-backed when
    /// `session_file` is set.
    pub fn from_config(config: Config) -> Self {
        let slot: Arc<dyn SessionSlot> = match &config.session_file {
            Some(path) => {
                let slot = FileSessionSlot::new(path.clone());
                tracing::info!(path = %slot.path().display(), "Persisting sessions to file");
                Arc::new(slot)
            }
            None => Arc::new(MemorySessionSlot::new()),
        };
        Self::with_parts(Arc::new(InMemoryProfileStore::seeded()), slot, config)
    }

    pub fn with_parts(
        profiles: Arc<dyn ProfileStore>,
        slot: Arc<dyn SessionSlot>,
        config: Config,
    ) -> Self {
        Self {
            profiles,
            sessions: Arc::new(SessionStore::new(slot)),
            pool: Arc::new(candidate_pool()),
            config: Arc::new(config),
        }
    }

    /// Reloads sessions saved by a previous run against the current profiles
    pub async fn restore_sessions(&self) -> AppResult<usize> {
        self.sessions.restore(self.profiles.as_ref()).await
    }

    /// Artificial delay standing in for network latency in the demo
    pub async fn simulate_latency(&self) {
        if self.config.simulated_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.simulated_latency_ms)).await;
        }
    }
}
