//! HTTP adapter for the gateway endpoints.
//!
//! Exposes customer creation, invoice create-and-publish, Square webhook
//! acknowledgement and a liveness check.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness check
//! - `POST /create-customer` - Create a Square customer
//! - `POST /create-square-invoice` - Create and publish an invoice
//! - `POST /square/webhook` - Acknowledge a Square webhook

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CreateInvoiceRequest, ErrorResponse, InvoiceResponse};
pub use handlers::{GatewayApiError, GatewayAppState, LIVENESS_MESSAGE, SQUARE_EVENT_TYPE_HEADER};
pub use routes::gateway_router;
