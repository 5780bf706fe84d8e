//! Typed error for the copilot crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopilotError {
    /// Failures from the model provider (transport, status, timeout, config).
    #[error("LLM error: {0}")]
    Llm(#[from] AiLlmError),

    /// The model answered, but not with the `{answer, action?}` shape.
    #[error("malformed model reply: {0}")]
    MalformedReply(String),

    /// Invalid copilot-level configuration.
    #[error("config error: {0}")]
    Config(String),
}
