//! Library exports for hellotron, shared between the binary and tests.

pub mod config;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
