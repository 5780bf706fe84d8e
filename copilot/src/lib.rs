//! Chat copilot for the ROI calculator UI.
//!
//! One global [`Conversation`] lives inside a [`CopilotSession`]. Each turn
//! assembles a prompt (history, rendered [`UiContext`], user text), sends it to
//! a [`ChatCompleter`] in JSON mode, validates the [`StructuredReply`] and
//! appends the human message, the answer and the context note to the history.

pub mod cfg;
pub mod completer;
pub mod conversation;
mod error;
pub mod prompt;
pub mod reply;
mod session;
pub mod ui_context;

pub use cfg::{CopilotConfig, HistoryPolicy};
pub use completer::{ChatCompleter, CompletionFuture};
pub use conversation::{Conversation, Message, Role};
pub use error::CopilotError;
pub use reply::{ActionPair, StructuredReply, parse_reply};
pub use session::CopilotSession;
pub use ui_context::{UiContext, apply_actions};

/// Messages appended to the conversation per successful turn
/// (human, assistant, context note).
pub const MESSAGES_PER_TURN: usize = 3;
