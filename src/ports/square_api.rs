//! Square API port for outbound calls.
//!
//! Every upstream request in the gateway goes through [`SquareApi::call`]:
//! an authenticated JSON request against a path relative to the configured
//! Square host.
//!
//! # Contract
//!
//! - A non-2xx upstream status is **not** an error. The parsed body is returned
//!   with its status and callers inspect it (e.g. for an `errors` field).
//! - Network failures and non-JSON bodies are errors.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Port for calls to the Square REST API.
#[async_trait]
pub trait SquareApi: Send + Sync {
    /// Send a request and parse the response body as JSON.
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, SquareApiError>;
}

/// HTTP method of an upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMethod {
    #[default]
    Get,
    Post,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An upstream request: method, path relative to the Square host, optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// A bodiless GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    /// A POST with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    /// A POST whose body is any serializable payload.
    pub fn post_json<T: Serialize>(
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, SquareApiError> {
        let body =
            serde_json::to_value(payload).map_err(|e| SquareApiError::Encode(e.to_string()))?;
        Ok(Self::post(path, body))
    }
}

/// Parsed upstream response, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body carries a non-null `errors` field.
    pub fn has_errors(&self) -> bool {
        self.body.get("errors").is_some_and(|e| !e.is_null())
    }
}

/// Failures that prevent an upstream response from being read at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareApiError {
    /// Request could not be sent or the response could not be received.
    #[error("request to Square failed: {0}")]
    Transport(String),

    /// Request body could not be encoded as JSON.
    #[error("could not encode request body: {0}")]
    Encode(String),

    /// Square answered but the body was not JSON.
    #[error("Square returned a non-JSON response (status {status}): {message}")]
    Decode { status: u16, message: String },
}

impl SquareApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        SquareApiError::Transport(message.into())
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        SquareApiError::Decode {
            status,
            message: message.into(),
        }
    }
}
