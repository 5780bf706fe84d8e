use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Endpoints advertised in routing error envelopes.
pub const AVAILABLE_ENDPOINTS: &[&str] = &["GET /", "POST /api/chat"];

/// Uniform failure body: `{ success: false, error, message }`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,

    /// Short error kind (e.g. "Endpoint not found").
    pub error: &'static str,

    /// Human-friendly error message.
    pub message: String,

    /// Known endpoints, attached to routing errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<&'static [&'static str]>,
}

impl ErrorEnvelope {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
            available_endpoints: None,
        }
    }

    pub fn with_endpoints(mut self) -> Self {
        self.available_endpoints = Some(AVAILABLE_ENDPOINTS);
        self
    }

    /// Convert to axum Response.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
