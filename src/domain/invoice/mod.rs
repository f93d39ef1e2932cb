//! Invoice domain module.
//!
//! Validates invoice requests and builds the Square create/publish payloads.
//!
//! # Module Structure
//!
//! - `request` - Validated `InvoiceRequest`
//! - `money` - Amount parsing and minor-unit conversion
//! - `draft` - Square invoice payloads and create-response parsing
//! - `errors` - Validation errors

mod draft;
mod errors;
mod money;
mod request;

pub use draft::{
    CreateInvoicePayload, CreatedInvoice, DeliveryMethod, InvoiceDraft, Money, PaymentRequest,
    PrimaryRecipient, PublishInvoicePayload, RequestType, INVOICE_TITLE,
};
pub use errors::InvoiceValidationError;
pub use money::{Amount, AmountInput};
pub use request::{InvoiceRequest, DEFAULT_CURRENCY};
