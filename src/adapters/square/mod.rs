//! Square API adapter.
//!
//! Implements the `SquareApi` port:
//! - `SquareClient` - reqwest client for the live or sandbox Square host
//! - `MockSquareApi` - scripted responses and call recording for tests
//!
//! # Configuration
//!
//! Reads from `SquareConfig`:
//! - `SQUARE_ENV`: `production` or sandbox (anything else)
//! - `SQUARE_ACCESS_TOKEN`: bearer credential
//! - `SQUARE_API_VERSION`: optional `Square-Version` header

mod mock_square_api;
mod square_client;

pub use mock_square_api::MockSquareApi;
pub use square_client::SquareClient;
