use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthCheckResponse {
    status: String,
}

/// Liveness probe backed by a real round trip to the store.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    match state.db.run_command(mongodb::bson::doc! {"ping": 1}).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthCheckResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(err) => {
            tracing::warn!("Health check ping failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthCheckResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}
