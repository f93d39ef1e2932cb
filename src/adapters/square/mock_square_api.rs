//! Mock Square API for testing.
//!
//! Returns scripted responses in order and records every request so tests can
//! assert on what would have been sent upstream.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::{ApiRequest, ApiResponse, SquareApi, SquareApiError};

/// Mock Square API.
///
/// # Example
///
/// ```ignore
/// let mock = MockSquareApi::new()
///     .with_response(200, json!({ "invoice": { "id": "inv_1", "version": 0 } }))
///     .with_response(200, json!({ "invoice": { "status": "UNPAID" } }));
///
/// // ... run the code under test ...
///
/// assert_eq!(mock.calls().len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MockSquareApi {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<ApiResponse, SquareApiError>>,
    calls: Vec<ApiRequest>,
}

impl MockSquareApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn with_response(self, status: u16, body: Value) -> Self {
        self.push(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a failure.
    pub fn with_error(self, error: SquareApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, outcome: Result<ApiResponse, SquareApiError>) {
        self.inner.lock().unwrap().responses.push_back(outcome);
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl SquareApi for MockSquareApi {
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, SquareApiError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(SquareApiError::transport("no scripted response")))
    }
}
