//! Runtime configuration loaded from environment variables.

use std::{fmt, str::FromStr};

use ai_llm_service::{LlmModelConfig, config::default_config::config_openai_chat};

use crate::error::CopilotError;

/// How much stored history is sent to the model on each turn.
///
/// The stored conversation always keeps every message; the policy only
/// shapes the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Send the whole conversation.
    #[default]
    Unbounded,
    /// Send the system prompt plus the last `n` turns.
    Window(usize),
}

impl FromStr for HistoryPolicy {
    type Err = CopilotError;

    /// Accepts `unbounded` or `window:<turns>` with `turns >= 1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        let turns = s
            .strip_prefix("window:")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                CopilotError::Config(format!(
                    "HISTORY_POLICY must be `unbounded` or `window:<turns>` (turns >= 1), got `{s}`"
                ))
            })?;
        Ok(Self::Window(turns))
    }
}

impl fmt::Display for HistoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryPolicy::Unbounded => f.write_str("unbounded"),
            HistoryPolicy::Window(n) => write!(f, "window:{n}"),
        }
    }
}

/// Everything the chat session needs.
#[derive(Debug, Clone)]
pub struct CopilotConfig {
    pub llm: LlmModelConfig,
    pub history: HistoryPolicy,
}

impl CopilotConfig {
    /// Loads the model config (`OPENAI_*`, `LLM_*`) and `HISTORY_POLICY`.
    ///
    /// # Errors
    /// Fails when `OPENAI_API_KEY` is missing or any knob is malformed.
    pub fn from_env() -> Result<Self, CopilotError> {
        let llm = config_openai_chat()?;
        let history = match std::env::var("HISTORY_POLICY") {
            Ok(v) if !v.trim().is_empty() => v.parse()?,
            _ => HistoryPolicy::default(),
        };
        Ok(Self { llm, history })
    }
}
