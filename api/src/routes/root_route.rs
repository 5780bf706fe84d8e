//! GET /: static service metadata.

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "ROI Calculator Backend";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: Endpoints,
    /// Local time, ISO 8601 without offset.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub chat: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        status: "running",
        endpoints: Endpoints {
            chat: "POST /api/chat",
        },
        timestamp: chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}
