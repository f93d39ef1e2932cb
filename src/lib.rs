//! Square Gateway - HTTP middleware between Servis.ai and Square
//!
//! Creates Square customers, creates and publishes Square invoices, and
//! acknowledges Square webhook deliveries.
//!
//! # Layout
//!
//! - `domain` - Request validation and Square payload construction
//! - `ports` - The `SquareApi` outbound port
//! - `application` - Command handlers orchestrating upstream calls
//! - `adapters` - Axum HTTP surface and the reqwest Square client
//! - `config` - Environment-driven settings
//! - `observability` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
