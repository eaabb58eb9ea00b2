//! # Fleet Rental Core
//!
//! Reconciles per-customer fleet rental logs and prices what each customer owes.
//!
//! ## Features
//!
//! - **Fleet catalog**: cars with catalog price, pick-up fee and per-kilometer cost
//! - **Event model**: pick-up, return and accident events, each pricing itself against a car
//! - **Reconciliation**: splits a history into rental procedures, or reports it `INCONSISTENT`
//! - **Audit reports**: one sorted `"<customer> <result>"` line per customer
//! - **Input protocol**: parser, field validation and a parallel batch driver
//!
//! ## Quick Start
//!
//! ```rust
//! use fleet_rental_core::{Car, Event, RentalService};
//!
//! let mut service = RentalService::in_memory();
//! service.register_car(Car::new("tesla", 1000, 50, 2)).unwrap();
//! service.log_event(Event::pick_up(0, "ann", "tesla")).unwrap();
//! service.log_event(Event::accident(1, "ann", 10)).unwrap();
//! service.log_event(Event::return_car(2, "ann", 30)).unwrap();
//!
//! let report = service.audit().unwrap();
//! assert_eq!(report.render(), vec!["ann 210"]);
//! ```

pub mod config;
pub mod engine;
pub mod fleet;
pub mod logging;
pub mod protocol;
pub mod rental;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use engine::*;
pub use fleet::*;
pub use protocol::*;
pub use rental::*;
pub use traits::*;
pub use types::*;
