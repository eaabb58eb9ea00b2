//! Traits for storage abstraction and extensibility

use crate::types::*;

/// Storage abstraction for the fleet catalog
///
/// The reconciliation service and the pricing engine only see cars through this trait, so a
/// catalog can be backed by anything that maps car identifiers to [`Car`] records.
pub trait FleetStorage: Send + Sync {
    /// Insert a car, replacing any car registered under the same identifier
    fn save_car(&mut self, car: Car) -> RentalResult<()>;

    /// Get a car by identifier
    fn get_car(&self, car_id: &str) -> Option<&Car>;

    /// List all cars, ordered by identifier
    fn list_cars(&self) -> Vec<&Car>;

    /// Get a car by identifier, failing with [`RentalError::UnknownCar`] if it was never registered
    fn get_car_required(&self, car_id: &str) -> RentalResult<&Car> {
        self.get_car(car_id)
            .ok_or_else(|| RentalError::UnknownCar(car_id.to_string()))
    }
}

/// Trait for implementing custom car validation rules
pub trait CarValidator: Send + Sync {
    /// Validate a car before it is registered
    fn validate_car(&self, car: &Car) -> RentalResult<()>;
}

/// Trait for implementing custom event validation rules
pub trait EventValidator: Send + Sync {
    /// Validate an event before it is appended to a customer's history
    fn validate_event(&self, event: &Event) -> RentalResult<()>;
}

/// Default car validator with basic rules
pub struct DefaultCarValidator;

impl CarValidator for DefaultCarValidator {
    fn validate_car(&self, car: &Car) -> RentalResult<()> {
        if car.id.trim().is_empty() {
            return Err(RentalError::Validation(
                "Car name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default event validator with basic rules
pub struct DefaultEventValidator;

impl EventValidator for DefaultEventValidator {
    fn validate_event(&self, event: &Event) -> RentalResult<()> {
        if event.customer().trim().is_empty() {
            return Err(RentalError::Validation(
                "Customer name cannot be empty".to_string(),
            ));
        }

        if let Event::Accident { severity, .. } = event {
            if *severity > 100 {
                return Err(RentalError::Validation(format!(
                    "Accident severity must be a percentage, got {}",
                    severity
                )));
            }
        }

        Ok(())
    }
}
