//! Shared application state.
//!
//! Contains the state that is shared across all request handlers.

use crate::config::ConfigV1;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// a reference to the configuration loaded at startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
}
