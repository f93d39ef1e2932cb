//! Ports - interfaces to external systems.
//!
//! The gateway has a single outbound dependency: the Square REST API.

mod square_api;

pub use square_api::{ApiMethod, ApiRequest, ApiResponse, SquareApi, SquareApiError};
