use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    league_id: i64,
    timestamp: i64,
}

// GET /health - Liveness probe, does not touch the upstream API
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        league_id: state.espn.league_id(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}

// GET / - Plain text banner
pub async fn banner() -> &'static str {
    "Fantasy League API - v1.0"
}
