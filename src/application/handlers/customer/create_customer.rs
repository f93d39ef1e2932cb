//! CreateCustomerHandler - Command handler for creating a Square customer.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::customer::{CustomerValidationError, NewCustomer};
use crate::ports::{ApiRequest, SquareApi, SquareApiError};

const CREATE_CUSTOMER_PATH: &str = "/v2/customers";

/// Command to create a customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerCommand {
    pub customer: NewCustomer,
}

/// Square's answer, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCustomerResult {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error(transparent)]
    Validation(#[from] CustomerValidationError),

    #[error(transparent)]
    Upstream(#[from] SquareApiError),
}

/// Handler for customer creation.
///
/// Forwards the validated customer to Square and relays the response,
/// including Square's own error responses.
pub struct CreateCustomerHandler {
    square_api: Arc<dyn SquareApi>,
}

impl CreateCustomerHandler {
    pub fn new(square_api: Arc<dyn SquareApi>) -> Self {
        Self { square_api }
    }

    pub async fn handle(
        &self,
        cmd: CreateCustomerCommand,
    ) -> Result<CreateCustomerResult, CustomerError> {
        cmd.customer.validate()?;

        let response = self
            .square_api
            .call(ApiRequest::post_json(CREATE_CUSTOMER_PATH, &cmd.customer)?)
            .await?;

        if response.has_errors() || !response.is_success() {
            tracing::warn!(status = response.status, "Square rejected customer");
        } else {
            tracing::info!(
                status = response.status,
                customer_id = response.body["customer"]["id"].as_str().unwrap_or_default(),
                "Customer created"
            );
        }

        Ok(CreateCustomerResult {
            status: response.status,
            body: response.body,
        })
    }
}
