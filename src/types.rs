//! Core types and data structures for the rental reconciliation system

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Token rendered in place of a price when a history cannot be reconciled
pub const INCONSISTENT: &str = "INCONSISTENT";

/// A car available for rent, together with its pricing attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier, lowercase letters only (e.g. "tesla")
    pub id: String,
    /// Catalog price, the basis for accident liability
    pub catalog_price: u64,
    /// Flat fee charged when the car is picked up
    pub pick_up_fee: u64,
    /// Cost per kilometer driven
    pub cost_per_km: u64,
}

impl Car {
    /// Create a new car
    pub fn new(id: impl Into<String>, catalog_price: u64, pick_up_fee: u64, cost_per_km: u64) -> Self {
        Self {
            id: id.into(),
            catalog_price,
            pick_up_fee,
            cost_per_km,
        }
    }
}

/// The three kinds of rental event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Customer takes a car
    PickUp,
    /// Customer brings the car back
    Return,
    /// Customer damages the car
    Accident,
}

impl EventKind {
    /// Single-letter code used by the input protocol
    pub fn code(&self) -> char {
        match self {
            EventKind::PickUp => 'p',
            EventKind::Return => 'r',
            EventKind::Accident => 'a',
        }
    }

    /// Parse a single-letter protocol code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(EventKind::PickUp),
            "r" => Some(EventKind::Return),
            "a" => Some(EventKind::Accident),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::PickUp => "pick-up",
            EventKind::Return => "return",
            EventKind::Accident => "accident",
        };
        f.write_str(name)
    }
}

/// A single entry in the rental log
///
/// `time` is a logical timestamp. Log order is authoritative and events are never re-sorted by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    PickUp {
        time: u64,
        customer: String,
        car_id: String,
    },
    Return {
        time: u64,
        customer: String,
        /// Kilometers driven since the pick-up
        distance: u64,
    },
    Accident {
        time: u64,
        customer: String,
        /// Damage as a percentage of the catalog price, 0 to 100
        severity: u8,
    },
}

impl Event {
    /// Create a pick-up event
    pub fn pick_up(time: u64, customer: impl Into<String>, car_id: impl Into<String>) -> Self {
        Event::PickUp {
            time,
            customer: customer.into(),
            car_id: car_id.into(),
        }
    }

    /// Create a return event
    pub fn return_car(time: u64, customer: impl Into<String>, distance: u64) -> Self {
        Event::Return {
            time,
            customer: customer.into(),
            distance,
        }
    }

    /// Create an accident event
    pub fn accident(time: u64, customer: impl Into<String>, severity: u8) -> Self {
        Event::Accident {
            time,
            customer: customer.into(),
            severity,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::PickUp { .. } => EventKind::PickUp,
            Event::Return { .. } => EventKind::Return,
            Event::Accident { .. } => EventKind::Accident,
        }
    }

    /// Customer owning this event
    pub fn customer(&self) -> &str {
        match self {
            Event::PickUp { customer, .. }
            | Event::Return { customer, .. }
            | Event::Accident { customer, .. } => customer,
        }
    }

    pub fn time(&self) -> u64 {
        match self {
            Event::PickUp { time, .. } | Event::Return { time, .. } | Event::Accident { time, .. } => {
                *time
            }
        }
    }

    /// Car named by a pick-up; other events inherit the car of their procedure
    pub fn car_id(&self) -> Option<&str> {
        match self {
            Event::PickUp { car_id, .. } => Some(car_id),
            _ => None,
        }
    }

    pub fn is(&self, kind: EventKind) -> bool {
        self.kind() == kind
    }
}

/// Outcome of reconciling one customer's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconciliation {
    /// The history is well-formed and the customer owes this amount
    Price(u64),
    /// The history cannot be split into well-formed rental procedures
    Inconsistent,
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Reconciliation::Price(_))
    }

    pub fn price(&self) -> Option<u64> {
        match self {
            Reconciliation::Price(price) => Some(*price),
            Reconciliation::Inconsistent => None,
        }
    }
}

impl fmt::Display for Reconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reconciliation::Price(price) => write!(f, "{}", price),
            Reconciliation::Inconsistent => f.write_str(INCONSISTENT),
        }
    }
}

/// One customer's line in an audit report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLine {
    pub customer: String,
    pub result: Reconciliation,
}

impl fmt::Display for AuditLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.customer, self.result)
    }
}

/// Audit of every customer in one test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique identifier for the report
    pub id: Uuid,
    /// When the report was generated
    pub generated_at: NaiveDateTime,
    /// Lines sorted by their rendered text
    pub lines: Vec<AuditLine>,
}

impl AuditReport {
    /// Build a report, sorting lines by their rendered form
    pub fn new(lines: Vec<AuditLine>) -> Self {
        let mut keyed: Vec<(String, AuditLine)> =
            lines.into_iter().map(|line| (line.to_string(), line)).collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            id: Uuid::new_v4(),
            generated_at: chrono::Utc::now().naive_utc(),
            lines: keyed.into_iter().map(|(_, line)| line).collect(),
        }
    }

    /// Rendered `"<customer> <result>"` lines in report order
    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }

    /// Result for a single customer, if they appear in the report
    pub fn result_for(&self, customer: &str) -> Option<Reconciliation> {
        self.lines
            .iter()
            .find(|line| line.customer == customer)
            .map(|line| line.result)
    }

    pub fn inconsistent_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !line.result.is_consistent())
            .count()
    }
}

/// Errors that abort processing of a test case
///
/// A malformed rental history is not an error; it is reported as [`Reconciliation::Inconsistent`].
#[derive(Debug, thiserror::Error)]
pub enum RentalError {
    #[error("Car with name '{0}' does not exist")]
    UnknownCar(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for rental operations
pub type RentalResult<T> = Result<T, RentalError>;
