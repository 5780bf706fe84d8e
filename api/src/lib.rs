//! HTTP surface of the ROI calculator copilot.
//!
//! Routes:
//! - `GET /`          service metadata
//! - `POST /api/chat` one copilot turn
//!
//! Every other path/method is answered with the uniform error envelope.

use std::{net::SocketAddr, sync::Arc};

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use copilot::CopilotSession;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

pub use crate::core::{app_state::AppState, server_config::ServerConfig};
pub use crate::error_handler::{AppError, AppResult};
pub use crate::middleware_layer::cors::ALLOWED_ORIGINS;

use crate::{
    middleware_layer::{
        cors::cors_layer, panic_guard::panic_response, request_log::request_log,
        security_headers::security_headers,
    },
    routes::{
        chat::chat_route::chat,
        fallback_route::{method_not_allowed, not_found},
        root_route::root,
    },
};

/// Builds the application router over `state`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root).fallback(method_not_allowed))
        .route("/api/chat", post(chat).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer())
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn_with_state(state.clone(), request_log))
        .with_state(state)
}

/// Binds `config.bind_addr()` and serves until Ctrl+C.
pub async fn start(config: ServerConfig, session: CopilotSession) -> AppResult<()> {
    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(session, config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
