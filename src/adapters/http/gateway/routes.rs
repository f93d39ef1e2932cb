//! Axum router configuration for gateway endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_customer, create_square_invoice, liveness, receive_webhook, GatewayAppState,
};

/// Create the gateway router.
///
/// # Routes
/// - `GET /` - Liveness check
/// - `POST /create-customer` - Create a Square customer
/// - `POST /create-square-invoice` - Create and publish a Square invoice
/// - `POST /square/webhook` - Acknowledge Square webhook events
pub fn gateway_router() -> Router<GatewayAppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/create-customer", post(create_customer))
        .route("/create-square-invoice", post(create_square_invoice))
        .route("/square/webhook", post(receive_webhook))
}
