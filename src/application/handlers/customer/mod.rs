//! Customer handlers.

mod create_customer;

pub use create_customer::{
    CreateCustomerCommand, CreateCustomerHandler, CreateCustomerResult, CustomerError,
};
