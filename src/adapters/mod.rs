//! Adapters - Implementations of ports and the inbound HTTP surface.
//!
//! - `http` - Axum routes, DTOs and error mapping
//! - `square` - Square REST client and a scripted test double

pub mod http;
pub mod square;
