//! CreateAndPublishInvoiceHandler - Command handler for creating and publishing a Square invoice.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::invoice::{
    AmountInput, CreateInvoicePayload, CreatedInvoice, InvoiceRequest, InvoiceValidationError,
};
use crate::ports::{ApiRequest, SquareApi, SquareApiError};

const CREATE_INVOICE_PATH: &str = "/v2/invoices";

/// Command to create and publish an invoice.
///
/// Fields are as received; validation happens in the handler.
#[derive(Debug, Clone, Default)]
pub struct CreateInvoiceCommand {
    pub customer_id: Option<String>,
    pub amount: Option<AmountInput>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

/// Both upstream responses, relayed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAndPublishInvoiceResult {
    pub create: Value,
    pub publish: Value,
}

/// Ways the invoice flow can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvoiceError {
    #[error(transparent)]
    Validation(#[from] InvoiceValidationError),

    /// Square answered the create call with an `errors` field.
    #[error("invoice create failed")]
    CreateRejected(Value),

    /// The create response lacked `invoice.id` or `invoice.version`.
    #[error("create response missing invoice id or version: {0}")]
    MalformedCreateResponse(String),

    #[error(transparent)]
    Upstream(#[from] SquareApiError),
}

/// Handler for the two-step invoice flow.
///
/// Creates a draft, then publishes it at the version Square returned. The
/// publish call is only issued once the create response is in hand, and never
/// if Square rejected the draft.
pub struct CreateAndPublishInvoiceHandler {
    square_api: Arc<dyn SquareApi>,
    location_id: Option<String>,
}

impl CreateAndPublishInvoiceHandler {
    pub fn new(square_api: Arc<dyn SquareApi>, location_id: Option<String>) -> Self {
        Self {
            square_api,
            location_id,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateInvoiceCommand,
    ) -> Result<CreateAndPublishInvoiceResult, InvoiceError> {
        // 1. Validate before touching Square
        let request = InvoiceRequest::try_new(
            cmd.customer_id,
            cmd.amount,
            cmd.currency,
            cmd.description,
            cmd.due_date,
        )?;

        // 2. Create the draft
        let payload = CreateInvoicePayload::for_request(&request, self.location_id.as_deref());
        let create = self
            .square_api
            .call(ApiRequest::post_json(CREATE_INVOICE_PATH, &payload)?)
            .await?;

        if create.has_errors() {
            tracing::error!(
                status = create.status,
                customer_id = request.customer_id(),
                "Square rejected invoice draft"
            );
            return Err(InvoiceError::CreateRejected(create.body));
        }

        // 3. Publish at the returned version
        let created = CreatedInvoice::from_response(&create.body)
            .ok_or_else(|| InvoiceError::MalformedCreateResponse(create.body.to_string()))?;

        let publish = self
            .square_api
            .call(ApiRequest::post_json(
                created.publish_path(),
                &created.publish_payload(),
            )?)
            .await?;

        if publish.has_errors() {
            tracing::warn!(
                status = publish.status,
                invoice_id = %created.id,
                "Square rejected invoice publish"
            );
        } else {
            tracing::info!(
                invoice_id = %created.id,
                version = created.version,
                amount_minor = request.amount_minor(),
                currency = request.currency(),
                "Invoice created and published"
            );
        }

        Ok(CreateAndPublishInvoiceResult {
            create: create.body,
            publish: publish.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::square::MockSquareApi;
    use crate::ports::ApiMethod;
    use serde_json::json;

    fn handler(mock: &MockSquareApi) -> CreateAndPublishInvoiceHandler {
        CreateAndPublishInvoiceHandler::new(Arc::new(mock.clone()), Some("LOC1".to_string()))
    }

    fn command(amount: f64) -> CreateInvoiceCommand {
        CreateInvoiceCommand {
            customer_id: Some("CUST_1".to_string()),
            amount: Some(AmountInput::from(amount)),
            ..Default::default()
        }
    }

    fn draft_created(id: &str, version: i64) -> Value {
        json!({ "invoice": { "id": id, "version": version, "status": "DRAFT" } })
    }

    #[tokio::test]
    async fn creates_then_publishes_at_returned_version() {
        let mock = MockSquareApi::new()
            .with_response(200, draft_created("inv_42", 7))
            .with_response(200, json!({ "invoice": { "id": "inv_42", "status": "UNPAID" } }));

        let result = handler(&mock).handle(command(12.345)).await.unwrap();

        assert_eq!(result.create, draft_created("inv_42", 7));
        assert_eq!(result.publish["invoice"]["status"], "UNPAID");

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);

        assert_eq!(calls[0].method, ApiMethod::Post);
        assert_eq!(calls[0].path, "/v2/invoices");
        let draft = calls[0].body.as_ref().unwrap();
        assert_eq!(draft["invoice"]["location_id"], "LOC1");
        assert_eq!(draft["invoice"]["primary_recipient"]["customer_id"], "CUST_1");
        assert_eq!(
            draft["invoice"]["payment_requests"][0]["fixed_amount_requested_money"],
            json!({ "amount": 1235, "currency": "USD" })
        );

        assert_eq!(calls[1].method, ApiMethod::Post);
        assert_eq!(calls[1].path, "/v2/invoices/inv_42/publish");
        assert_eq!(calls[1].body, Some(json!({ "invoice_version": 7 })));
    }

    #[tokio::test]
    async fn missing_fields_make_no_upstream_call() {
        let mock = MockSquareApi::new();

        let no_customer = CreateInvoiceCommand {
            customer_id: None,
            ..command(10.0)
        };
        let no_amount = CreateInvoiceCommand {
            amount: None,
            ..command(10.0)
        };

        for cmd in [no_customer, no_amount] {
            let result = handler(&mock).handle(cmd).await;
            assert_eq!(
                result,
                Err(InvoiceError::Validation(InvoiceValidationError::MissingRequired))
            );
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn rejected_draft_is_never_published() {
        let rejection = json!({
            "errors": [{ "category": "INVALID_REQUEST_ERROR", "code": "NOT_FOUND" }]
        });
        let mock = MockSquareApi::new()
            .with_response(400, rejection.clone())
            .with_response(200, json!({}));

        let result = handler(&mock).handle(command(5.0)).await;

        assert_eq!(result, Err(InvoiceError::CreateRejected(rejection)));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn create_response_without_version_is_malformed() {
        let mock = MockSquareApi::new().with_response(200, json!({ "invoice": { "id": "inv_1" } }));

        let result = handler(&mock).handle(command(5.0)).await;

        assert!(matches!(result, Err(InvoiceError::MalformedCreateResponse(_))));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let mock = MockSquareApi::new().with_error(SquareApiError::transport("connection reset"));

        let result = handler(&mock).handle(command(5.0)).await;

        assert_eq!(
            result,
            Err(InvoiceError::Upstream(SquareApiError::transport("connection reset")))
        );
    }

    #[tokio::test]
    async fn publish_errors_are_relayed_not_raised() {
        let publish_rejection = json!({ "errors": [{ "code": "VERSION_MISMATCH" }] });
        let mock = MockSquareApi::new()
            .with_response(200, draft_created("inv_9", 0))
            .with_response(400, publish_rejection.clone());

        let result = handler(&mock).handle(command(1.0)).await.unwrap();

        assert_eq!(result.publish, publish_rejection);
    }
}
