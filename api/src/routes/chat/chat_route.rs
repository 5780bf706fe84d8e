//! POST /api/chat: runs one copilot turn.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use copilot::StructuredReply;
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::ChatRequest,
};

/// Handler: POST /api/chat
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/api/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"Set employees to 150","ui_context":{"employee":"250"}}'
/// ```
#[instrument(name = "chat_route", skip_all)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<StructuredReply>> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) if state.config.strict_input => {
            return Err(AppError::BadRequest(rejection.body_text()));
        }
        Err(rejection) => {
            return Err(AppError::Internal(format!(
                "unparseable chat body: {}",
                rejection.body_text()
            )));
        }
    };

    let (message, ui_context) = req.resolve(state.config.strict_input)?;
    debug!(message_len = message.len(), ui_fields = ui_context.len(), "chat request");

    let reply = state.session.run_turn(&message, &ui_context).await?;
    Ok(Json(reply))
}
