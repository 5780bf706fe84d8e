use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use copilot::CopilotError;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::{http::response_envelope::ErrorEnvelope, server_config::ConfigError};

/// Message shown to callers for every 500; details stay in the logs.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{0}")]
    BadRequest(String),

    #[error("The requested endpoint '{0}' does not exist.")]
    NotFound(String),

    #[error("The method '{method}' is not allowed for this endpoint.")]
    MethodNotAllowed { method: String, path: String },

    // --- Chat pipeline ---
    #[error(transparent)]
    Copilot(#[from] CopilotError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Copilot(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn envelope(&self) -> ErrorEnvelope {
        match self {
            AppError::BadRequest(msg) => ErrorEnvelope::new("Bad request", msg.clone()),
            AppError::NotFound(_) => {
                ErrorEnvelope::new("Endpoint not found", self.to_string()).with_endpoints()
            }
            AppError::MethodNotAllowed { .. } => {
                ErrorEnvelope::new("Method not allowed", self.to_string()).with_endpoints()
            }
            _ => ErrorEnvelope::new("Unexpected error", GENERIC_FAILURE_MESSAGE),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::NotFound(path) => warn!(%path, "404 endpoint not found"),
            AppError::MethodNotAllowed { method, path } => {
                warn!(%method, %path, "405 method not allowed")
            }
            AppError::BadRequest(msg) => warn!(%msg, "400 bad request"),
            other => error!(error = %other, detail = ?other, "500 unhandled failure"),
        }
        self.envelope().into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_collapse_to_generic_500() {
        let err = AppError::from(CopilotError::MalformedReply("bad".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let env = err.envelope();
        assert_eq!(env.error, "Unexpected error");
        assert_eq!(env.message, GENERIC_FAILURE_MESSAGE);
        assert!(env.available_endpoints.is_none());
    }

    #[test]
    fn routing_errors_list_endpoints() {
        let err = AppError::NotFound("/nope".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let env = err.envelope();
        assert_eq!(env.message, "The requested endpoint '/nope' does not exist.");
        assert!(env.available_endpoints.is_some());

        let err = AppError::MethodNotAllowed {
            method: "GET".into(),
            path: "/api/chat".into(),
        };
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            err.envelope().message,
            "The method 'GET' is not allowed for this endpoint."
        );
    }
}
