//! Square REST API client.
//!
//! Implements the `SquareApi` port with `reqwest`. Each call targets the host
//! selected by `SQUARE_ENV` and carries a bearer token plus JSON headers.
//!
//! # Configuration
//!
//! ```ignore
//! let client = SquareClient::new(&config.square);
//! let response = client.call(ApiRequest::post("/v2/customers", body)).await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::SquareConfig;
use crate::ports::{ApiMethod, ApiRequest, ApiResponse, SquareApi, SquareApiError};

const SQUARE_VERSION_HEADER: &str = "Square-Version";
const JSON_MEDIA_TYPE: &str = "application/json";

/// Square API client.
pub struct SquareClient {
    base_url: String,
    access_token: SecretString,
    api_version: Option<String>,
    http_client: reqwest::Client,
}

impl SquareClient {
    /// Create a client for the configured Square environment.
    pub fn new(config: &SquareConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            access_token: config.access_token.clone(),
            api_version: config.api_version.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Point the client at a different host (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl From<ApiMethod> for reqwest::Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl SquareApi for SquareClient {
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, SquareApiError> {
        let url = self.url_for(&request.path);

        let mut builder = self
            .http_client
            .request(request.method.into(), &url)
            .bearer_auth(self.access_token.expose_secret())
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE);

        if let Some(version) = &self.api_version {
            builder = builder.header(SQUARE_VERSION_HEADER, version);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, path = %request.path, "Calling Square");

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, path = %request.path, "Square request failed");
            SquareApiError::transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SquareApiError::transport(e.to_string()))?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(
                status,
                error = %e,
                path = %request.path,
                "Square response was not JSON"
            );
            SquareApiError::decode(status, e.to_string())
        })?;

        tracing::debug!(status, path = %request.path, "Square responded");

        Ok(ApiResponse::new(status, body))
    }
}
