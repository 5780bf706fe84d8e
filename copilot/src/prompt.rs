//! Prompt builder: fixed system prompt, history window, UI snapshot, user turn.

use crate::{
    cfg::HistoryPolicy,
    conversation::{Message, Role},
    ui_context::UiContext,
};

/// Instruction prompt that opens every conversation.
pub const SYSTEM_PROMPT: &str = r#"You are an intelligent Copilot Chatbot designed to assist users with a multi-section ROI calculator UI.
Your specialty is:
1. Reading and understanding all visible UI information (summary text, input fields, output fields, charts, help text).
2. Answering questions based on the current UI state.
3. Updating input fields dynamically when the user requests changes.
4. Only updating input fields that are present in the UI context.
5. Always returning responses as a JSON object with the fields: `answer` (your response to the user) and `action` (the command to update the UI, if any: an array of [field, value] string pairs, for example [["field1", "value1"], ["field2", "value2"]]).
"#;

const CONTEXT_HEADER: &str = "Current UI Context:\n";

/// Renders the UI snapshot as the context note the model reads.
pub fn render_context_note(ui_context: &UiContext) -> Message {
    Message::context_note(format!("{CONTEXT_HEADER}{ui_context}"))
}

/// Ordered messages for one turn.
///
/// Always ends with the context note followed by the human message.
#[derive(Debug, Clone)]
pub struct AssembledPrompt {
    messages: Vec<Message>,
}

impl AssembledPrompt {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn context_note(&self) -> &Message {
        &self.messages[self.messages.len() - 2]
    }

    pub fn human(&self) -> &Message {
        &self.messages[self.messages.len() - 1]
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Builds the prompt: history (filtered by `policy`), then the rendered
/// `ui_context`, then `user_message` verbatim.
///
/// # Example
/// ```
/// use copilot::{Conversation, HistoryPolicy, UiContext, prompt};
///
/// let conv = Conversation::initialize(prompt::SYSTEM_PROMPT);
/// let p = prompt::assemble(conv.messages(), &UiContext::new(), "hi", HistoryPolicy::Unbounded);
/// assert_eq!(p.messages().len(), 3);
/// assert_eq!(p.human().content(), "hi");
/// ```
pub fn assemble(
    history: &[Message],
    ui_context: &UiContext,
    user_message: &str,
    policy: HistoryPolicy,
) -> AssembledPrompt {
    let kept = windowed(history, policy);
    let mut messages = Vec::with_capacity(kept.len() + 2);
    messages.extend(kept.into_iter().cloned());
    messages.push(render_context_note(ui_context));
    messages.push(Message::human(user_message));
    AssembledPrompt { messages }
}

/// Leading system prompt plus the messages of the last `n` turns.
fn windowed(history: &[Message], policy: HistoryPolicy) -> Vec<&Message> {
    let HistoryPolicy::Window(turns) = policy else {
        return history.iter().collect();
    };

    let (head, tail) = match history.first() {
        Some(m) if m.role() == Role::System => (&history[..1], &history[1..]),
        _ => (&history[..0], history),
    };
    let keep = tail.len().min(turns.saturating_mul(crate::MESSAGES_PER_TURN));
    head.iter().chain(tail[tail.len() - keep..].iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MESSAGES_PER_TURN, conversation::Conversation};

    fn history_with_turns(n: usize) -> Conversation {
        let mut c = Conversation::initialize(SYSTEM_PROMPT);
        for i in 0..n {
            c.append(Message::human(format!("q{i}")));
            c.append(Message::assistant(format!("a{i}")));
            c.append(Message::context_note(format!("ctx{i}")));
        }
        c
    }

    #[test]
    fn order_is_history_then_context_then_human() {
        let c = history_with_turns(1);
        let ui: UiContext = [("employee", "250")].into_iter().collect();
        let p = assemble(c.messages(), &ui, "Set employees to 150", HistoryPolicy::Unbounded);

        let roles: Vec<Role> = p.messages().iter().map(Message::role).collect();
        assert_eq!(
            roles,
            [
                Role::System,
                Role::Human,
                Role::Assistant,
                Role::ContextNote,
                Role::ContextNote,
                Role::Human,
            ]
        );
        assert_eq!(
            p.context_note().content(),
            "Current UI Context:\n{\"employee\":\"250\"}"
        );
        assert_eq!(p.human().content(), "Set employees to 150");
    }

    #[test]
    fn empty_context_still_renders_a_note() {
        let c = Conversation::initialize(SYSTEM_PROMPT);
        let p = assemble(c.messages(), &UiContext::new(), "", HistoryPolicy::Unbounded);
        assert_eq!(p.context_note().content(), "Current UI Context:\n{}");
        assert_eq!(p.human().content(), "");
    }

    #[test]
    fn window_keeps_system_prompt_and_last_turns() {
        let c = history_with_turns(5);
        let p = assemble(c.messages(), &UiContext::new(), "next", HistoryPolicy::Window(2));

        assert_eq!(p.messages().len(), 1 + 2 * 3 + 2);
        assert_eq!(p.messages()[0].content(), SYSTEM_PROMPT);
        assert_eq!(p.messages()[1].content(), "q3");
        assert_eq!(p.messages()[6].content(), "ctx4");
    }

    #[test]
    fn assembled_prompt_owns_its_history_copy() {
        let mut c = history_with_turns(1);
        let p = assemble(c.messages(), &UiContext::new(), "again", HistoryPolicy::Window(1));
        c.append(Message::human("later"));

        let owned: Vec<Message> = p.into_messages();
        assert_eq!(owned.len(), 1 + MESSAGES_PER_TURN + 2);
        assert_eq!(owned[1], Message::human("q0"));
        assert_eq!(owned.last(), Some(&Message::human("again")));
    }

    #[test]
    fn window_larger_than_history_sends_everything() {
        let c = history_with_turns(2);
        let p = assemble(c.messages(), &UiContext::new(), "next", HistoryPolicy::Window(10));
        assert_eq!(p.messages().len(), c.len() + 2);
    }
}
