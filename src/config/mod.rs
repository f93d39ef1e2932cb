//! Application configuration module
//!
//! Configuration is read once at startup from the process environment (plus an
//! optional `.env` file) using the `config` and `dotenvy` crates. Variable
//! names are unprefixed and case-insensitive: `PORT`, `SQUARE_ENV`,
//! `SQUARE_ACCESS_TOKEN`, `SQUARE_LOCATION_ID`, `BASE_URL`, `LOG_FORMAT`.
//!
//! # Example
//!
//! ```no_run
//! use square_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Square base: {}", config.square.base_url());
//! ```

mod error;
mod server;
mod square;

pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use square::{SquareConfig, SquareEnvironment};

use secrecy::SecretString;
use serde::Deserialize;

/// Root application configuration
///
/// Immutable after [`AppConfig::load()`]; handed to the router at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, log filter)
    pub server: ServerConfig,

    /// Square API configuration (environment, credentials, location)
    pub square: SquareConfig,
}

/// Flat view of the recognized environment variables.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    #[serde(default = "server::default_host")]
    host: String,
    #[serde(default = "server::default_port")]
    port: u16,
    #[serde(default = "server::default_log_level")]
    log_level: String,
    base_url: Option<String>,
    log_format: Option<String>,
    square_env: Option<String>,
    square_access_token: Option<String>,
    square_location_id: Option<String>,
    square_api_version: Option<String>,
}

impl From<EnvSettings> for AppConfig {
    fn from(env: EnvSettings) -> Self {
        Self {
            server: ServerConfig {
                host: env.host,
                port: env.port,
                log_level: env.log_level,
                base_url: env.base_url,
                log_format: LogFormat::from_setting(env.log_format.as_deref()),
            },
            square: SquareConfig {
                environment: SquareEnvironment::from_setting(env.square_env.as_deref()),
                access_token: SecretString::new(env.square_access_token.unwrap_or_default()),
                location_id: env.square_location_id,
                api_version: env.square_api_version.filter(|v| !v.trim().is_empty()),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present (development), then reads the process
    /// environment. Every variable is optional at this stage; use
    /// [`AppConfig::validate()`] to check that credentials are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected
    /// type (e.g. a non-numeric `PORT`).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    fn from_environment(source: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.into())
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.square.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_environment(config::Environment::default().source(Some(map)))
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.square.environment, SquareEnvironment::Sandbox);
        assert!(config.square.location_id.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_environment() {
        let config = from_vars(&[
            ("PORT", "8085"),
            ("SQUARE_ENV", "production"),
            ("SQUARE_ACCESS_TOKEN", "EAAAtoken"),
            ("SQUARE_LOCATION_ID", "LOC123"),
            ("SQUARE_API_VERSION", "2024-01-18"),
            ("BASE_URL", "https://gateway.example.com"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 8085);
        assert_eq!(config.square.environment, SquareEnvironment::Production);
        assert_eq!(config.square.base_url(), "https://connect.squareup.com");
        assert_eq!(config.square.access_token.expose_secret(), "EAAAtoken");
        assert_eq!(config.square.location_id.as_deref(), Some("LOC123"));
        assert_eq!(config.square.api_version.as_deref(), Some("2024-01-18"));
        assert_eq!(config.server.public_base_url(), "https://gateway.example.com");
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_square_env_is_sandbox() {
        let config = from_vars(&[("SQUARE_ENV", "staging")]).unwrap();
        assert_eq!(config.square.base_url(), "https://connect.squareupsandbox.com");
    }

    #[test]
    fn test_invalid_port_fails_to_load() {
        assert!(from_vars(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_load_from_process_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SQUARE_LOCATION_ID", "LOC_FROM_ENV");
        env::set_var("PORT", "3999");
        let result = AppConfig::load();
        env::remove_var("SQUARE_LOCATION_ID");
        env::remove_var("PORT");

        let config = result.unwrap();
        assert_eq!(config.square.location_id.as_deref(), Some("LOC_FROM_ENV"));
        assert_eq!(config.server.port, 3999);
    }
}
