//! Domain layer - request validation and Square payload construction.
//!
//! Nothing here performs I/O; the application layer drives the outbound calls.

pub mod customer;
pub mod invoice;
