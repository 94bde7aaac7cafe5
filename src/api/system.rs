use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{AppState, HealthResponse};

/// `GET /api/system/health/live`
///
/// Liveness probe; answers as long as the process is serving requests.
pub async fn health_live(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "alive",
        database: None,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// `GET /api/system/health/ready`
///
/// Readiness probe that checks the store is reachable.
pub async fn health_ready(State(state): State<Arc<AppState>>) -> Response {
    let db_ready = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };

    let status = if db_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if db_ready { "ready" } else { "not_ready" },
            database: Some(if db_ready { "ok" } else { "unreachable" }),
            uptime_seconds: state.start_time.elapsed().as_secs(),
        }),
    )
        .into_response()
}
