use copilot::UiContext;
use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};

/// Message used when the caller sends none.
pub const DEFAULT_MESSAGE: &str = "hi, what do you do?";

/// Request payload for POST /api/chat.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// User text for this turn.
    #[serde(default)]
    pub message: Option<String>,
    /// Current UI state snapshot.
    #[serde(default)]
    pub ui_context: Option<UiContext>,
}

impl ChatRequest {
    /// Resolves absent fields.
    ///
    /// Permissive mode substitutes [`DEFAULT_MESSAGE`] and an empty context;
    /// strict mode rejects a missing `message` with 400.
    pub fn resolve(self, strict: bool) -> AppResult<(String, UiContext)> {
        let message = match self.message {
            Some(m) => m,
            None if strict => {
                return Err(AppError::BadRequest("field `message` is required".into()));
            }
            None => DEFAULT_MESSAGE.to_string(),
        };
        Ok((message, self.ui_context.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_defaults() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        let (msg, ui) = req.resolve(false).unwrap();
        assert_eq!(msg, DEFAULT_MESSAGE);
        assert!(ui.is_empty());

        let req: ChatRequest = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(req.resolve(false).unwrap().0, DEFAULT_MESSAGE);
    }

    #[test]
    fn strict_requires_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"ui_context":{}}"#).unwrap();
        assert!(matches!(req.resolve(true), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn keeps_supplied_values() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"Set employees to 150","ui_context":{"employee":"250"}}"#)
                .unwrap();
        let (msg, ui) = req.resolve(true).unwrap();
        assert_eq!(msg, "Set employees to 150");
        assert!(ui.contains("employee"));
    }

    #[test]
    fn non_object_context_is_rejected_by_serde() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"ui_context":"employee=1"}"#).is_err());
    }
}
