//! Fleet module holding the catalog of rentable cars

pub mod catalog;

pub use catalog::*;
