//! The greeting endpoint.

use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

/// The fixed greeting returned to every caller.
const GREETING: &str = "Hello World!";

/// Registers the greeting route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(say_hello))
}

/// Returns the fixed greeting as plain text.
///
/// Stateless and deterministic: consumes nothing from the request and
/// produces identical output on every call.
async fn say_hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("Content-Type", "text/plain;charset=UTF-8")],
        GREETING,
    )
}
