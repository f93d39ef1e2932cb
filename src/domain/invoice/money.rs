//! Invoice amounts and their conversion to minor currency units.
//!
//! Amounts arrive in major units (e.g. dollars) either as a JSON number or as a
//! numeric string. Conversion happens in decimal arithmetic so that `12.345`
//! becomes `1235` cents rather than suffering binary float error.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use super::errors::InvoiceValidationError;

/// Raw amount as sent by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Number(n) => write!(f, "{}", n),
            AmountInput::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(AmountInput::Number)
            .unwrap_or_else(|| AmountInput::Text(value.to_string()))
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// A validated, strictly positive amount in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a raw amount.
    ///
    /// Zero counts as absent so callers can report it the same way as a
    /// missing field.
    pub fn parse(input: &AmountInput) -> Result<Option<Self>, InvoiceValidationError> {
        let text = match input {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.trim().to_string(),
        };
        if text.is_empty() {
            return Ok(None);
        }

        let value = parse_decimal(&text)
            .ok_or_else(|| InvoiceValidationError::InvalidAmount(input.to_string()))?;

        if value.is_zero() {
            return Ok(None);
        }
        if value.is_sign_negative() {
            return Err(InvoiceValidationError::InvalidAmount(input.to_string()));
        }
        Ok(Some(Self(value)))
    }

    /// Amount x 100 rounded to the nearest integer, halves away from zero.
    pub fn to_minor_units(&self) -> Result<i64, InvoiceValidationError> {
        let minor = self
            .0
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| InvoiceValidationError::AmountOutOfRange(self.0.to_string()))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let minor = minor
            .to_i64()
            .ok_or_else(|| InvoiceValidationError::AmountOutOfRange(self.0.to_string()))?;

        if minor < 1 {
            return Err(InvoiceValidationError::AmountBelowMinimum(self.0.to_string()));
        }
        Ok(minor)
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn minor(input: AmountInput) -> Result<i64, InvoiceValidationError> {
        Amount::parse(&input)?
            .expect("amount should be present")
            .to_minor_units()
    }

    #[test]
    fn rounds_half_up_in_decimal() {
        assert_eq!(minor(AmountInput::from(12.345)), Ok(1235));
    }

    #[test]
    fn whole_and_fractional_amounts() {
        assert_eq!(minor(AmountInput::from(100.0)), Ok(10000));
        assert_eq!(minor(AmountInput::from(19.99)), Ok(1999));
        assert_eq!(minor(AmountInput::from(0.01)), Ok(1));
        assert_eq!(minor(AmountInput::from(1.004)), Ok(100));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(minor(AmountInput::from("42.50")), Ok(4250));
        assert_eq!(minor(AmountInput::from(" 7 ")), Ok(700));
        assert_eq!(minor(AmountInput::from("1e2")), Ok(10000));
    }

    #[test]
    fn integer_json_numbers_are_accepted() {
        let input: AmountInput = serde_json::from_str("25").unwrap();
        assert_eq!(minor(input), Ok(2500));
    }

    #[test]
    fn zero_and_blank_count_as_absent() {
        assert_eq!(Amount::parse(&AmountInput::from(0.0)), Ok(None));
        assert_eq!(Amount::parse(&AmountInput::from("0.00")), Ok(None));
        assert_eq!(Amount::parse(&AmountInput::from("")), Ok(None));
    }

    #[test]
    fn negative_and_garbage_are_rejected() {
        assert!(matches!(
            Amount::parse(&AmountInput::from(-5.0)),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::parse(&AmountInput::from("ten dollars")),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn sub_cent_amounts_are_rejected() {
        assert!(matches!(
            minor(AmountInput::from(0.001)),
            Err(InvoiceValidationError::AmountBelowMinimum(_))
        ));
    }

    proptest! {
        #[test]
        fn cents_survive_conversion(cents in 1i64..10_000_000_000) {
            let text = format!("{}.{:02}", cents / 100, cents % 100);
            prop_assert_eq!(minor(AmountInput::Text(text)), Ok(cents));
        }

        #[test]
        fn thousandths_round_half_away_from_zero(mills in 10i64..10_000_000_000) {
            let text = format!("{}.{:03}", mills / 1000, mills % 1000);
            let expected = (mills + 5) / 10;
            prop_assert_eq!(minor(AmountInput::Text(text)), Ok(expected));
        }
    }
}
