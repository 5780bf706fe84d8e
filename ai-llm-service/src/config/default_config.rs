//! Default LLM config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = provider credential (mandatory)
//! - `OPENAI_MODEL`     = chat model (default `gpt-4.1-nano`)
//! - `OPENAI_BASE_URL`  = API base (default `https://api.openai.com`)
//! - `LLM_TEMPERATURE`  = sampling temperature (default `0.7`, range `0.0..=2.0`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = upstream timeout (default 30)

use crate::{
    config::llm_model_config::{DEFAULT_TIMEOUT_SECS, LlmModelConfig},
    error_handler::{
        AiLlmError, env_opt, env_opt_f32, env_opt_u32, env_opt_u64, must_env,
        validate_http_endpoint, validate_range_f32,
    },
};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Moderate randomness: answers vary between runs but stay on topic.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Constructs the chat model config used by the copilot.
///
/// # Errors
///
/// - [`crate::ConfigError::MissingVar`] if `OPENAI_API_KEY` is unset or empty
/// - [`crate::ConfigError::InvalidNumber`] for unparsable numeric knobs
/// - [`crate::ConfigError::OutOfRange`] if the temperature is outside `0.0..=2.0`
/// - [`crate::ConfigError::InvalidFormat`] if the base URL lacks an http(s) scheme
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;

    let endpoint = env_opt("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.into());
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    let temperature = env_opt_f32("LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    Ok(LlmModelConfig {
        model: env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
        endpoint,
        api_key: Some(api_key),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: Some(temperature),
        top_p: None,
        timeout_secs: Some(env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}
