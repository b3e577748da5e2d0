//! Dastak API library.
//!
//! This crate provides the delivery-ordering API as a library, allowing it
//! to be tested and reused. The binary in `main.rs` wires configuration,
//! the seeded in-memory store and the AI provider client into [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ai;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router over `state`.
///
/// Everything the server serves hangs off this router; integration tests
/// drive it directly without binding a socket.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// check: the store lives in process memory.
async fn health() -> &'static str {
    "ok"
}
