use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompleter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The LLM seam. Production wires in `LlmClient`; tests a canned mock.
    pub llm: Arc<dyn ChatCompleter>,
    pub config: Config,
}
