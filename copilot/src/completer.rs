//! Model seam: anything that turns an ordered transcript into completion text.

use std::{future::Future, pin::Pin};

use ai_llm_service::{ChatMessage, OpenAiService, ResponseFormat};

use crate::{conversation::Message, error::CopilotError};

/// Boxed future returned by [`ChatCompleter::complete`].
pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String, CopilotError>> + Send + 'a>>;

/// Provider interface for JSON-mode chat completion.
///
/// Implementations return the raw completion text; validation against the
/// reply shape happens in the session.
pub trait ChatCompleter: Send + Sync {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a>;
}

impl ChatCompleter for OpenAiService {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a> {
        Box::pin(async move {
            let wire: Vec<ChatMessage> = messages.iter().map(Message::to_chat).collect();
            let text = self.chat(&wire, ResponseFormat::JsonObject).await?;
            Ok(text)
        })
    }
}
