use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::storage::{MemStorage, Storage};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable store. Default: seeded `MemStorage`.
    pub store: Arc<dyn Storage>,
    /// `None` when no LLM key is configured; filter extraction then answers 503.
    pub llm: Option<LlmClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, llm: Option<LlmClient>, config: Config) -> Self {
        Self { store, llm, config }
    }

    /// Seeded in-memory store, no LLM, default config.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemStorage::new()), None, Config::default())
    }
}
