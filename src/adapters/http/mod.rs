//! HTTP adapters - REST API implementations.

pub mod gateway;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use gateway::{gateway_router, GatewayAppState};

/// Build the full application router with request tracing.
pub fn build_app(state: GatewayAppState) -> Router {
    gateway_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
