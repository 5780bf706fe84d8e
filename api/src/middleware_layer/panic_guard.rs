use std::any::Any;

use axum::{http::StatusCode, response::Response};
use tracing::error;

use crate::{core::http::response_envelope::ErrorEnvelope, error_handler::GENERIC_FAILURE_MESSAGE};

/// Response produced by `CatchPanicLayer` when a handler panics.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(%detail, "handler panicked");

    ErrorEnvelope::new("Unexpected error", GENERIC_FAILURE_MESSAGE)
        .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
}
