//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the greeting endpoint and the operational actuator endpoints.

mod actuator_routes;
mod hello_routes;

use crate::state::AppState;
use axum::Router;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches
/// the application state for access in handlers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(hello_routes::routes())
        .merge(actuator_routes::routes())
        .with_state(state)
}
