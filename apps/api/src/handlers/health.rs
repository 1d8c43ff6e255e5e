use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.grant_store.count_grants().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                grant_store: "ok",
            }),
        ),
        Err(error) => {
            warn!(%error, "grant store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    grant_store: "error",
                }),
            )
        }
    }
}
