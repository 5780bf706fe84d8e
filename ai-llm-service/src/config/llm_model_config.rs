use std::time::Duration;

/// Default upstream timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-4.1-nano"`).
/// - `endpoint`: API base URL; `/v1/chat/completions` is appended.
/// - `api_key`: Bearer credential for the provider.
/// - `max_tokens`: Maximum number of tokens to generate (if supported).
/// - `temperature`: Controls randomness (0.0 = deterministic, 2.0 = most random).
/// - `top_p`: Nucleus sampling cutoff (alternative to temperature).
/// - `timeout_secs`: Optional request timeout in seconds.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-4.1-nano".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     max_tokens: None,
///     temperature: Some(0.7),
///     top_p: None,
///     timeout_secs: Some(30),
/// };
/// assert_eq!(cfg.timeout().as_secs(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Remote API base URL.
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Effective request timeout, falling back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
