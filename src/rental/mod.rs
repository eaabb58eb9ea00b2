//! Rental module containing the reconciliation service and the batch driver

pub mod batch;
pub mod service;

pub use batch::*;
pub use service::*;
