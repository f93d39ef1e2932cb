//! Application layer - Commands and Handlers.
//!
//! Orchestrates domain validation and outbound Square calls through the
//! `SquareApi` port.

pub mod handlers;

pub use handlers::{
    CreateAndPublishInvoiceHandler, CreateAndPublishInvoiceResult, CreateCustomerCommand,
    CreateCustomerHandler, CreateCustomerResult, CreateInvoiceCommand, CustomerError,
    InvoiceError,
};
