use std::sync::Arc;

use copilot::CopilotSession;

use crate::core::server_config::ServerConfig;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide chat session (conversation + model client).
    pub session: Arc<CopilotSession>,
    /// Bind address, debug toggle and input strictness.
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(session: impl Into<Arc<CopilotSession>>, config: ServerConfig) -> Self {
        Self {
            session: session.into(),
            config,
        }
    }
}
