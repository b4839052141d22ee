pub mod matrix;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};

use crate::server::state::AppState;
use crate::types::api::{EndpointInfo, HealthResponse, ServiceInfo};

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// GET / - Service description
pub async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let started_at = state.started_at();
    let endpoint = |method: &str, path: &str, description: &str| EndpointInfo {
        method: method.to_string(),
        path: path.to_string(),
        description: description.to_string(),
    };

    Json(ServiceInfo {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        start_time: started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        uptime_seconds: (Utc::now() - started_at).num_seconds(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        stats_api_url: state.config().stats.base_url.clone(),
        endpoints: vec![
            endpoint("GET", "/health", "health check"),
            endpoint("GET", "/", "service information"),
            endpoint(
                "POST",
                "/matrix/process",
                "rotate, QR-factorize and enrich a matrix (requires Bearer token)",
            ),
        ],
    })
}
