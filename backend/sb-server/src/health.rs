use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let email = if state.mail_configured {
        "configured"
    } else {
        "unconfigured"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "projects": state.catalog.len(),
            "email": email,
        },
        "timestamp": humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.catalog.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
