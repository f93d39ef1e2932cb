//! Validated invoice request.

use chrono::NaiveDate;

use super::errors::InvoiceValidationError;
use super::money::{Amount, AmountInput};

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// An invoice request that has passed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRequest {
    customer_id: String,
    amount_minor: i64,
    currency: String,
    description: String,
    due_date: Option<NaiveDate>,
}

impl InvoiceRequest {
    /// Validate raw invoice fields.
    ///
    /// Missing `customer_id` or `amount` is checked first so that it wins over
    /// any other complaint about the same request.
    pub fn try_new(
        customer_id: Option<String>,
        amount: Option<AmountInput>,
        currency: Option<String>,
        description: Option<String>,
        due_date: Option<String>,
    ) -> Result<Self, InvoiceValidationError> {
        let customer_id = customer_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(InvoiceValidationError::MissingRequired)?;

        let amount = match amount {
            Some(input) => Amount::parse(&input)?,
            None => None,
        }
        .ok_or(InvoiceValidationError::MissingRequired)?;

        let amount_minor = amount.to_minor_units()?;
        let currency = parse_currency(currency)?;
        let due_date = parse_due_date(due_date)?;

        Ok(Self {
            customer_id,
            amount_minor,
            currency,
            description: description.unwrap_or_default(),
            due_date,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Amount in minor currency units (cents for USD).
    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Due date in the `YYYY-MM-DD` form Square expects.
    pub fn due_date_string(&self) -> Option<String> {
        self.due_date
            .map(|d| d.format(DUE_DATE_FORMAT).to_string())
    }
}

fn parse_currency(currency: Option<String>) -> Result<String, InvoiceValidationError> {
    let Some(raw) = currency else {
        return Ok(DEFAULT_CURRENCY.to_string());
    };

    let code = raw.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InvoiceValidationError::InvalidCurrency(raw));
    }
    Ok(code.to_ascii_uppercase())
}

fn parse_due_date(due_date: Option<String>) -> Result<Option<NaiveDate>, InvoiceValidationError> {
    match due_date {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
            .map(Some)
            .map_err(|_| InvoiceValidationError::InvalidDueDate(raw)),
    }
}
