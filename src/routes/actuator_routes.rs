//! Operational endpoints under /actuator.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};

/// Registers the health and info routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/actuator/health", get(health))
        .route("/actuator/info", get(info))
}

/// Reports service availability.
///
/// The service has no downstream dependencies, so reaching the handler
/// at all means it is up.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}

/// Serves the operator-supplied metadata from the `info` config section.
///
/// Returns an empty JSON object when nothing is configured.
async fn info(State(state): State<AppState>) -> impl IntoResponse {
    Json(Value::Object(state.config.info.clone()))
}
