//! Square invoice payloads built from a validated request.

use serde::Serialize;
use serde_json::Value;

use super::request::InvoiceRequest;

/// Title given to every invoice created through the gateway.
pub const INVOICE_TITLE: &str = "Servis.ai Invoice";

/// Body of `POST /v2/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateInvoicePayload {
    pub invoice: InvoiceDraft,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    pub title: String,
    pub description: String,
    pub primary_recipient: PrimaryRecipient,
    pub payment_requests: Vec<PaymentRequest>,
    pub delivery_method: DeliveryMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryRecipient {
    pub customer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub request_type: RequestType,
    /// Serialized as `null` when absent.
    pub due_date: Option<String>,
    pub fixed_amount_requested_money: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    Email,
}

impl CreateInvoicePayload {
    /// Build a single-balance, email-delivered draft for the request.
    pub fn for_request(request: &InvoiceRequest, location_id: Option<&str>) -> Self {
        Self {
            invoice: InvoiceDraft {
                location_id: location_id.map(str::to_string),
                title: INVOICE_TITLE.to_string(),
                description: request.description().to_string(),
                primary_recipient: PrimaryRecipient {
                    customer_id: request.customer_id().to_string(),
                },
                payment_requests: vec![PaymentRequest {
                    request_type: RequestType::Balance,
                    due_date: request.due_date_string(),
                    fixed_amount_requested_money: Money {
                        amount: request.amount_minor(),
                        currency: request.currency().to_string(),
                    },
                }],
                delivery_method: DeliveryMethod::Email,
            },
        }
    }
}

/// Body of `POST /v2/invoices/{id}/publish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishInvoicePayload {
    pub invoice_version: i64,
}

/// The `invoice.id` and `invoice.version` of a freshly created draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedInvoice {
    pub id: String,
    pub version: i64,
}

impl CreatedInvoice {
    /// Read `invoice.id` and `invoice.version` from a create response.
    ///
    /// Returns `None` if either is missing or has the wrong type.
    pub fn from_response(body: &Value) -> Option<Self> {
        let invoice = body.get("invoice")?;
        let id = invoice.get("id")?.as_str()?.to_string();
        let version = invoice.get("version")?.as_i64()?;
        Some(Self { id, version })
    }

    pub fn publish_path(&self) -> String {
        format!("/v2/invoices/{}/publish", self.id)
    }

    pub fn publish_payload(&self) -> PublishInvoicePayload {
        PublishInvoicePayload {
            invoice_version: self.version,
        }
    }
}
