//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
}

/// Reports service health, including a database ping.
///
/// # Endpoint
///
/// `GET /health` - public. Returns `503` with `"degraded"` when the
/// database does not answer.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
        .is_ok();

    if database {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database,
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "degraded",
                database,
            }),
        )
    }
}
