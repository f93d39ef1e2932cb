//! Customer domain module.

mod new_customer;

pub use new_customer::{Address, CustomerValidationError, NewCustomer, TaxIds};
