//! Invoice request validation errors.
//!
//! All variants map to HTTP 400 at the boundary.

use thiserror::Error;

/// Reasons an invoice request is rejected before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceValidationError {
    /// `customer_id` is absent/blank or `amount` is absent/zero.
    #[error("customer_id and amount required")]
    MissingRequired,

    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(String),

    #[error("amount {0} is too small to bill (minimum 0.01)")]
    AmountBelowMinimum(String),

    #[error("amount {0} is too large")]
    AmountOutOfRange(String),

    #[error("currency must be a three-letter ISO 4217 code, got {0:?}")]
    InvalidCurrency(String),

    #[error("due_date must be formatted YYYY-MM-DD, got {0:?}")]
    InvalidDueDate(String),
}
