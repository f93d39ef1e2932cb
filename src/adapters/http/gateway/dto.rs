//! HTTP DTOs (Data Transfer Objects) for gateway endpoints.
//!
//! Customer requests deserialize straight into the domain `NewCustomer`, which
//! already mirrors Square's schema; only the invoice request needs its own shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::invoice::{CreateAndPublishInvoiceResult, CreateInvoiceCommand};
use crate::domain::invoice::AmountInput;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /create-square-invoice`.
///
/// Every field is optional at this layer so that a missing `customer_id` or
/// `amount` yields the dedicated 400 message instead of a generic parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateInvoiceRequest {
    pub customer_id: Option<String>,
    pub amount: Option<AmountInput>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl From<CreateInvoiceRequest> for CreateInvoiceCommand {
    fn from(request: CreateInvoiceRequest) -> Self {
        Self {
            customer_id: request.customer_id,
            amount: request.amount,
            currency: request.currency,
            description: request.description,
            due_date: request.due_date,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Both Square responses from the invoice flow. Meant for debugging; the
/// inner shapes are whatever Square returned.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceResponse {
    pub create: Value,
    pub publish: Value,
}

impl From<CreateAndPublishInvoiceResult> for InvoiceResponse {
    fn from(result: CreateAndPublishInvoiceResult) -> Self {
        Self {
            create: result.create,
            publish: result.publish,
        }
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoice_request_accepts_all_fields() {
        let request: CreateInvoiceRequest = serde_json::from_value(json!({
            "customer_id": "CUST_1",
            "amount": 12.5,
            "currency": "CAD",
            "description": "Hedge trimming",
            "due_date": "2026-12-01"
        }))
        .unwrap();

        let cmd = CreateInvoiceCommand::from(request);
        assert_eq!(cmd.customer_id.as_deref(), Some("CUST_1"));
        assert!(matches!(cmd.amount, Some(AmountInput::Number(_))));
        assert_eq!(cmd.currency.as_deref(), Some("CAD"));
    }

    #[test]
    fn invoice_request_tolerates_missing_and_null_fields() {
        let request: CreateInvoiceRequest =
            serde_json::from_value(json!({ "amount": "10.00", "due_date": null })).unwrap();
        assert!(request.customer_id.is_none());
        assert!(request.due_date.is_none());
        assert_eq!(request.amount, Some(AmountInput::Text("10.00".to_string())));
    }

    #[test]
    fn invoice_request_rejects_unknown_fields() {
        let result: Result<CreateInvoiceRequest, _> =
            serde_json::from_value(json!({ "customer_id": "C", "amount": 1, "tip": 5 }));
        assert!(result.is_err());
    }

    #[test]
    fn error_response_omits_absent_details() {
        let body = serde_json::to_value(ErrorResponse::new("create-customer failed")).unwrap();
        assert_eq!(body, json!({ "error": "create-customer failed" }));

        let body = serde_json::to_value(
            ErrorResponse::new("invoice create failed").with_details(json!({ "errors": [] })),
        )
        .unwrap();
        assert_eq!(body["details"], json!({ "errors": [] }));
    }
}
