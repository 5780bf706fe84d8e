//! Chat-completion client for OpenAI-compatible providers.
//!
//! - [`LlmModelConfig`] describes one model invocation (env loader in
//!   [`config::default_config`]).
//! - [`OpenAiService`] performs non-streaming chat completions, optionally in
//!   JSON mode.
//! - [`telemetry`] exposes a library-scoped `tracing` layer for binaries.

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use chat::{ChatMessage, ChatRole, ResponseFormat};
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, ConfigError, ProviderError, ProviderErrorKind};
pub use services::open_ai_service::OpenAiService;
