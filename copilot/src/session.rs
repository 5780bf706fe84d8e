use std::{sync::Arc, time::Instant};

use ai_llm_service::OpenAiService;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::{
    cfg::{CopilotConfig, HistoryPolicy},
    completer::ChatCompleter,
    conversation::{Conversation, Message},
    error::CopilotError,
    prompt::{self, SYSTEM_PROMPT},
    reply::{StructuredReply, parse_reply},
    ui_context::UiContext,
};

/// Owner of the process-wide conversation and the model client.
///
/// Construct once, wrap in `Arc`, and share between request handlers.
/// The prompt is built from a snapshot under the read lock; the model call
/// runs unlocked; the three messages of a successful turn are appended under
/// a single write lock, so a failed turn leaves the history untouched.
pub struct CopilotSession {
    conversation: RwLock<Conversation>,
    completer: Arc<dyn ChatCompleter>,
    history: HistoryPolicy,
}

impl CopilotSession {
    /// Starts a fresh conversation holding only the system prompt.
    pub fn new(completer: Arc<dyn ChatCompleter>, history: HistoryPolicy) -> Self {
        Self {
            conversation: RwLock::new(Conversation::initialize(SYSTEM_PROMPT)),
            completer,
            history,
        }
    }

    /// Builds the OpenAI client from `cfg` and starts a session on it.
    ///
    /// # Errors
    /// Fails fast on a missing/blank API key or an invalid endpoint.
    pub fn from_config(cfg: &CopilotConfig) -> Result<Self, CopilotError> {
        let client = OpenAiService::new(cfg.llm.clone())?;
        Ok(Self::new(Arc::new(client), cfg.history))
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        self.history
    }

    /// Runs one chat turn.
    ///
    /// # Errors
    /// Propagates provider failures and [`CopilotError::MalformedReply`];
    /// in both cases nothing is appended to the conversation.
    #[instrument(
        name = "copilot_turn",
        skip_all,
        fields(message_len = message.len(), ui_fields = ui_context.len())
    )]
    pub async fn run_turn(
        &self,
        message: &str,
        ui_context: &UiContext,
    ) -> Result<StructuredReply, CopilotError> {
        let started = Instant::now();

        let prompt = {
            let conv = self.conversation.read().await;
            prompt::assemble(conv.messages(), ui_context, message, self.history)
        };
        debug!(prompt_messages = prompt.messages().len(), "prompt assembled");

        let raw = self.completer.complete(prompt.messages()).await?;
        let reply = parse_reply(&raw).inspect_err(|e| {
            warn!(error = %e, raw_len = raw.len(), "model reply rejected");
        })?;

        let total = {
            let mut conv = self.conversation.write().await;
            conv.append(prompt.human().clone());
            conv.append(Message::assistant(reply.answer.clone()));
            conv.append(prompt.context_note().clone());
            conv.len()
        };

        info!(
            history_len = total,
            actions = reply.actions().len(),
            latency_ms = started.elapsed().as_millis(),
            "turn completed"
        );

        Ok(reply)
    }

    /// Snapshot of the full ordered history.
    pub async fn history(&self) -> Vec<Message> {
        self.conversation.read().await.messages().to_vec()
    }

    pub async fn message_count(&self) -> usize {
        self.conversation.read().await.len()
    }
}
