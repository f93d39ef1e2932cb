//! Invoice handlers.

mod create_and_publish_invoice;

pub use create_and_publish_invoice::{
    CreateAndPublishInvoiceHandler, CreateAndPublishInvoiceResult, CreateInvoiceCommand,
    InvoiceError,
};
