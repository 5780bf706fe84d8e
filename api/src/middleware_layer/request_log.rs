use std::{net::SocketAddr, sync::Arc, time::Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::core::app_state::AppState;

/// Logs each request and its response status when the debug toggle is on.
pub async fn request_log(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.config.debug {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".into());
    info!(%method, %path, %remote, "request received");

    let started = Instant::now();
    let res = next.run(req).await;

    info!(
        %method,
        %path,
        status = res.status().as_u16(),
        latency_ms = started.elapsed().as_millis(),
        "response sent"
    );
    res
}
