//! Configuration for input validation bounds

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::*;

/// Inclusive numeric bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Limits applied to every field of the input protocol
///
/// Any field missing from a limits file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub test_cases: Bounds,
    pub cars: Bounds,
    pub events: Bounds,
    pub catalog_price: Bounds,
    pub pick_up_fee: Bounds,
    pub cost_per_km: Bounds,
    pub name_length: Bounds,
    pub event_time: Bounds,
    pub distance: Bounds,
    pub severity: Bounds,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            test_cases: Bounds::new(1, 100),
            cars: Bounds::new(0, 500),
            events: Bounds::new(0, 10_000),
            catalog_price: Bounds::new(1, 100_000),
            pick_up_fee: Bounds::new(1, 1_000),
            cost_per_km: Bounds::new(1, 100),
            name_length: Bounds::new(1, 40),
            event_time: Bounds::new(0, 100_000),
            distance: Bounds::new(0, 1_000),
            severity: Bounds::new(0, 100),
        }
    }
}

impl ValidationLimits {
    /// Parse limits from JSON and check them
    pub fn from_json_str(json: &str) -> RentalResult<Self> {
        let limits: ValidationLimits = serde_json::from_str(json)
            .map_err(|e| RentalError::Config(format!("Invalid limits file: {}", e)))?;
        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a JSON file
    pub fn load(path: impl AsRef<Path>) -> RentalResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            RentalError::Config(format!("Cannot read limits file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Ensure every range is non-empty and severity stays a percentage
    pub fn validate(&self) -> RentalResult<()> {
        let named = [
            ("test_cases", self.test_cases),
            ("cars", self.cars),
            ("events", self.events),
            ("catalog_price", self.catalog_price),
            ("pick_up_fee", self.pick_up_fee),
            ("cost_per_km", self.cost_per_km),
            ("name_length", self.name_length),
            ("event_time", self.event_time),
            ("distance", self.distance),
            ("severity", self.severity),
        ];

        for (name, bounds) in named {
            if bounds.min > bounds.max {
                return Err(RentalError::Config(format!(
                    "{} bounds are empty: min {} > max {}",
                    name, bounds.min, bounds.max
                )));
            }
        }

        if self.severity.max > 100 {
            return Err(RentalError::Config(
                "severity cannot exceed 100 percent".to_string(),
            ));
        }

        Ok(())
    }
}
