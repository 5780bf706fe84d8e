//! Append-only conversation log.

use ai_llm_service::{ChatMessage, ChatRole};
use serde::Serialize;

/// Who produced a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// The fixed instruction prompt.
    System,
    Human,
    Assistant,
    /// Rendered UI snapshot the model saw for a turn.
    ContextNote,
}

impl Role {
    /// Role tag sent to the provider. Context notes travel as system messages.
    pub fn chat_role(self) -> ChatRole {
        match self {
            Role::System | Role::ContextNote => ChatRole::System,
            Role::Human => ChatRole::User,
            Role::Assistant => ChatRole::Assistant,
        }
    }
}

/// Immutable role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new(Role::Human, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn context_note(content: impl Into<String>) -> Self {
        Self::new(Role::ContextNote, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Provider wire form of this message.
    pub fn to_chat(&self) -> ChatMessage {
        ChatMessage::new(self.role.chat_role(), self.content.clone())
    }
}

/// Ordered history of the single global conversation.
///
/// The first message is always the system prompt. Messages are only ever
/// appended; nothing is removed or reordered.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts a conversation holding only `system_prompt`.
    pub fn initialize(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Full ordered history, system prompt first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the system prompt is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_single_system_prompt() {
        let c = Conversation::initialize("rules");
        assert_eq!(c.len(), 1);
        assert_eq!(c.messages()[0].role(), Role::System);
        assert_eq!(c.messages()[0].content(), "rules");
    }

    #[test]
    fn append_keeps_order_and_duplicates() {
        let mut c = Conversation::initialize("rules");
        c.append(Message::human("a"));
        c.append(Message::human("a"));
        c.append(Message::assistant("b"));

        let contents: Vec<&str> = c.messages().iter().map(Message::content).collect();
        assert_eq!(contents, ["rules", "a", "a", "b"]);
        assert_eq!(c.messages()[0].role(), Role::System);
    }

    #[test]
    fn roles_map_to_provider_tags() {
        assert_eq!(Message::context_note("x").to_chat().role, ChatRole::System);
        assert_eq!(Message::human("x").to_chat().role, ChatRole::User);
        assert_eq!(Message::assistant("x").to_chat().role, ChatRole::Assistant);
    }

    #[test]
    fn role_serializes_kebab_case() {
        let v = serde_json::to_value(Message::context_note("ui")).unwrap();
        assert_eq!(v["role"], "context-note");
    }
}
