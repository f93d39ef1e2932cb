//! Square API configuration

use secrecy::{ExposeSecret, SecretString};

use super::error::ValidationError;

const PRODUCTION_BASE_URL: &str = "https://connect.squareup.com";
const SANDBOX_BASE_URL: &str = "https://connect.squareupsandbox.com";

/// Which Square deployment upstream calls go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquareEnvironment {
    Production,
    #[default]
    Sandbox,
}

impl SquareEnvironment {
    /// Only the exact value `production` selects production; everything else is sandbox.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("production") => SquareEnvironment::Production,
            _ => SquareEnvironment::Sandbox,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            SquareEnvironment::Production => PRODUCTION_BASE_URL,
            SquareEnvironment::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SquareEnvironment::Production => "production",
            SquareEnvironment::Sandbox => "sandbox",
        }
    }
}

/// Square API configuration
#[derive(Debug, Clone)]
pub struct SquareConfig {
    /// Selects the upstream host
    pub environment: SquareEnvironment,

    /// Bearer token for upstream calls
    pub access_token: SecretString,

    /// Location embedded in invoice drafts
    pub location_id: Option<String>,

    /// Value for the `Square-Version` header, if pinned
    pub api_version: Option<String>,
}

impl SquareConfig {
    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    /// Validate Square configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("SQUARE_ACCESS_TOKEN"));
        }
        match self.location_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingRequired("SQUARE_LOCATION_ID")),
        }
    }
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            environment: SquareEnvironment::default(),
            access_token: SecretString::new(String::new()),
            location_id: None,
            api_version: None,
        }
    }
}
