//! HTTP handlers for gateway endpoints.
//!
//! These handlers connect Axum routes to the customer and invoice command
//! handlers, and acknowledge Square webhook deliveries.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::customer::{
    CreateCustomerCommand, CreateCustomerHandler, CustomerError,
};
use crate::application::handlers::invoice::{
    CreateAndPublishInvoiceHandler, CreateInvoiceCommand, InvoiceError,
};
use crate::domain::customer::NewCustomer;
use crate::ports::SquareApi;

use super::dto::{CreateInvoiceRequest, ErrorResponse, InvoiceResponse};

/// Body of the liveness response.
pub const LIVENESS_MESSAGE: &str = "Square–Servis.ai Middleware is running ✔️";

/// Header Square uses to name the webhook event type.
pub const SQUARE_EVENT_TYPE_HEADER: &str = "x-square-event-type";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for gateway routes.
///
/// Cloned per request; the Square client sits behind an `Arc`.
#[derive(Clone)]
pub struct GatewayAppState {
    pub square_api: Arc<dyn SquareApi>,
    pub location_id: Option<String>,
}

impl GatewayAppState {
    pub fn new(square_api: Arc<dyn SquareApi>, location_id: Option<String>) -> Self {
        Self {
            square_api,
            location_id,
        }
    }

    pub fn create_customer_handler(&self) -> CreateCustomerHandler {
        CreateCustomerHandler::new(self.square_api.clone())
    }

    pub fn create_and_publish_invoice_handler(&self) -> CreateAndPublishInvoiceHandler {
        CreateAndPublishInvoiceHandler::new(self.square_api.clone(), self.location_id.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Liveness check
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// POST /create-customer - Create a Square customer
///
/// Square's status and body are relayed as-is, errors included.
pub async fn create_customer(
    State(state): State<GatewayAppState>,
    payload: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayApiError> {
    let Json(customer) = payload?;

    let result = state
        .create_customer_handler()
        .handle(CreateCustomerCommand { customer })
        .await?;

    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(result.body)))
}

/// POST /create-square-invoice - Create a draft invoice and publish it
pub async fn create_square_invoice(
    State(state): State<GatewayAppState>,
    payload: Result<Json<CreateInvoiceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayApiError> {
    let Json(request) = payload?;

    let result = state
        .create_and_publish_invoice_handler()
        .handle(CreateInvoiceCommand::from(request))
        .await?;

    Ok(Json(InvoiceResponse::from(result)))
}

/// POST /square/webhook - Acknowledge a Square event
///
/// Any body is accepted, JSON or not.
// TODO: verify the x-square-hmacsha256-signature header once a webhook signature key is configured.
pub async fn receive_webhook(headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let event_type = headers
        .get(SQUARE_EVENT_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("missing");

    tracing::info!(event_type, bytes = body.len(), "Square webhook received");
    tracing::debug!(body = %String::from_utf8_lossy(&body), "Square webhook payload");

    (StatusCode::OK, "ok")
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that maps request and application errors to responses.
#[derive(Debug)]
pub enum GatewayApiError {
    /// Body was not valid JSON for the endpoint.
    BadRequest(String),
    Customer(CustomerError),
    Invoice(InvoiceError),
}

impl From<JsonRejection> for GatewayApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<CustomerError> for GatewayApiError {
    fn from(err: CustomerError) -> Self {
        Self::Customer(err)
    }
}

impl From<InvoiceError> for GatewayApiError {
    fn from(err: InvoiceError) -> Self {
        Self::Invoice(err)
    }
}

impl IntoResponse for GatewayApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            GatewayApiError::BadRequest(message) => {
                tracing::warn!(%message, "Rejected request body");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            GatewayApiError::Customer(CustomerError::Validation(err)) => {
                tracing::warn!(error = %err, "Rejected customer");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(err.to_string()))
            }
            GatewayApiError::Customer(CustomerError::Upstream(err)) => {
                tracing::error!(error = %err, "create-customer failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("create-customer failed"),
                )
            }
            GatewayApiError::Invoice(InvoiceError::Validation(err)) => {
                tracing::warn!(error = %err, "Rejected invoice request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(err.to_string()))
            }
            GatewayApiError::Invoice(InvoiceError::CreateRejected(details)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("invoice create failed").with_details(details),
            ),
            GatewayApiError::Invoice(err) => {
                tracing::error!(error = %err, "create-square-invoice failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("create-square-invoice failed")
                        .with_details(serde_json::Value::String(err.to_string())),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
