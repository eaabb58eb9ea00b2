//! Validation utilities

use crate::config::{Bounds, ValidationLimits};
use crate::traits::*;
use crate::types::*;

/// Validate that a value lies within inclusive bounds
pub fn validate_range(field: &str, value: u64, bounds: Bounds) -> RentalResult<()> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(RentalError::Validation(format!(
            "{} must be >= {} and <= {}, got {}",
            field, bounds.min, bounds.max, value
        )))
    }
}

/// Validate that a car or customer name is made of lowercase letters within the length bounds
pub fn validate_name(field: &str, name: &str, length: Bounds) -> RentalResult<()> {
    if !name.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(RentalError::Validation(format!(
            "{} '{}' must contain lowercase letters only",
            field, name
        )));
    }

    validate_range(&format!("{} length", field), name.len() as u64, length)
}

/// Car validator enforcing the input protocol's limits
pub struct EnhancedCarValidator {
    limits: ValidationLimits,
}

impl EnhancedCarValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }
}

impl CarValidator for EnhancedCarValidator {
    fn validate_car(&self, car: &Car) -> RentalResult<()> {
        validate_name("car name", &car.id, self.limits.name_length)?;
        validate_range("car catalog price", car.catalog_price, self.limits.catalog_price)?;
        validate_range("car pick-up price", car.pick_up_fee, self.limits.pick_up_fee)?;
        validate_range("car price per km", car.cost_per_km, self.limits.cost_per_km)?;
        Ok(())
    }
}

/// Event validator enforcing the input protocol's limits
pub struct EnhancedEventValidator {
    limits: ValidationLimits,
}

impl EnhancedEventValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }
}

impl EventValidator for EnhancedEventValidator {
    fn validate_event(&self, event: &Event) -> RentalResult<()> {
        validate_range("event time", event.time(), self.limits.event_time)?;
        validate_name("customer name", event.customer(), self.limits.name_length)?;

        match event {
            Event::PickUp { car_id, .. } => {
                validate_name("car name", car_id, self.limits.name_length)
            }
            Event::Return { distance, .. } => {
                validate_range("distance driven", *distance, self.limits.distance)
            }
            Event::Accident { severity, .. } => {
                validate_range("severity", u64::from(*severity), self.limits.severity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        let length = Bounds::new(1, 40);
        assert!(validate_name("customer name", "ann", length).is_ok());
        assert!(validate_name("customer name", "Ann", length).is_err());
        assert!(validate_name("customer name", "ann_b", length).is_err());
        assert!(validate_name("customer name", "", length).is_err());
        assert!(validate_name("customer name", &"a".repeat(41), length).is_err());
    }

    #[test]
    fn test_validate_range_message() {
        let err = validate_range("distance driven", 1001, Bounds::new(0, 1000)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: distance driven must be >= 0 and <= 1000, got 1001"
        );
    }

    #[test]
    fn test_enhanced_car_validator() {
        let validator = EnhancedCarValidator::new(ValidationLimits::default());
        assert!(validator.validate_car(&Car::new("tesla", 1000, 50, 2)).is_ok());
        assert!(validator.validate_car(&Car::new("tesla", 0, 50, 2)).is_err());
        assert!(validator.validate_car(&Car::new("tesla", 1000, 1001, 2)).is_err());
        assert!(validator.validate_car(&Car::new("tesla", 1000, 50, 101)).is_err());
        assert!(validator.validate_car(&Car::new("Tesla", 1000, 50, 2)).is_err());
    }

    #[test]
    fn test_enhanced_event_validator() {
        let validator = EnhancedEventValidator::new(ValidationLimits::default());
        assert!(validator.validate_event(&Event::pick_up(0, "ann", "tesla")).is_ok());
        assert!(validator.validate_event(&Event::return_car(100_001, "ann", 1)).is_err());
        assert!(validator.validate_event(&Event::return_car(1, "ann", 1001)).is_err());
        assert!(validator.validate_event(&Event::accident(1, "ann", 100)).is_ok());
        assert!(validator.validate_event(&Event::accident(1, "ann", 101)).is_err());
        assert!(validator.validate_event(&Event::accident(1, "ANN", 1)).is_err());
    }
}
