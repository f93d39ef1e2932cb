//! Command handlers for the gateway's upstream operations.

pub mod customer;
pub mod invoice;

pub use customer::{
    CreateCustomerCommand, CreateCustomerHandler, CreateCustomerResult, CustomerError,
};
pub use invoice::{
    CreateAndPublishInvoiceHandler, CreateAndPublishInvoiceResult, CreateInvoiceCommand,
    InvoiceError,
};
