//! Reconciliation service owning the fleet and the customer histories of one test case

use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::reconcile;
use crate::fleet::FleetCatalog;
use crate::traits::*;
use crate::types::*;

/// Owns a fleet catalog and every customer's event history for one test case
///
/// Cars are registered first, then events are logged in arrival order, then [`audit`] prices
/// every customer.
///
/// [`audit`]: RentalService::audit
pub struct RentalService<S: FleetStorage = FleetCatalog> {
    id: Uuid,
    fleet: S,
    histories: HashMap<String, Vec<Event>>,
    car_validator: Box<dyn CarValidator>,
    event_validator: Box<dyn EventValidator>,
}

impl RentalService<FleetCatalog> {
    /// Create a service backed by an empty in-memory catalog
    pub fn in_memory() -> Self {
        Self::new(FleetCatalog::new())
    }
}

impl Default for RentalService<FleetCatalog> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: FleetStorage> RentalService<S> {
    /// Create a new service with the given fleet storage
    pub fn new(fleet: S) -> Self {
        Self::with_validators(
            fleet,
            Box::new(DefaultCarValidator),
            Box::new(DefaultEventValidator),
        )
    }

    /// Create a new service with custom validators
    pub fn with_validators(
        fleet: S,
        car_validator: Box<dyn CarValidator>,
        event_validator: Box<dyn EventValidator>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            fleet,
            histories: HashMap::new(),
            car_validator,
            event_validator,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn fleet(&self) -> &S {
        &self.fleet
    }

    /// Register a car, replacing any car with the same identifier
    pub fn register_car(&mut self, car: Car) -> RentalResult<()> {
        self.car_validator.validate_car(&car)?;

        debug!(service = %self.id, car = %car.id, "registering car");
        self.fleet.save_car(car)
    }

    /// Append an event to its customer's history
    ///
    /// A pick-up naming a car that is not in the fleet is rejected with [`RentalError::UnknownCar`].
    pub fn log_event(&mut self, event: Event) -> RentalResult<()> {
        self.event_validator.validate_event(&event)?;

        if let Some(car_id) = event.car_id() {
            if self.fleet.get_car(car_id).is_none() {
                warn!(
                    service = %self.id,
                    customer = event.customer(),
                    car = car_id,
                    "event references unregistered car"
                );
                return Err(RentalError::UnknownCar(car_id.to_string()));
            }
        }

        debug!(
            service = %self.id,
            customer = event.customer(),
            kind = %event.kind(),
            time = event.time(),
            "logging event"
        );
        self.histories
            .entry(event.customer().to_string())
            .or_default()
            .push(event);
        Ok(())
    }

    /// Log a sequence of events in order, stopping at the first rejected one
    pub fn log_events<I>(&mut self, events: I) -> RentalResult<()>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.log_event(event)?;
        }
        Ok(())
    }

    /// History of one customer in log order
    pub fn history(&self, customer: &str) -> Option<&[Event]> {
        self.histories.get(customer).map(Vec::as_slice)
    }

    /// Customers with at least one event, sorted by name
    pub fn customers(&self) -> Vec<&str> {
        let mut customers: Vec<&str> = self.histories.keys().map(String::as_str).collect();
        customers.sort_unstable();
        customers
    }

    /// Reconcile every customer once and report the results sorted by rendered line
    pub fn audit(&self) -> RentalResult<AuditReport> {
        let mut lines = Vec::with_capacity(self.histories.len());
        for (customer, events) in &self.histories {
            let result = reconcile(events, &self.fleet)?;
            lines.push(AuditLine {
                customer: customer.clone(),
                result,
            });
        }

        let report = AuditReport::new(lines);
        info!(
            service = %self.id,
            report = %report.id,
            customers = report.lines.len(),
            inconsistent = report.inconsistent_count(),
            "audit complete"
        );
        Ok(report)
    }
}
