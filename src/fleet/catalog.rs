//! In-memory fleet catalog

use std::collections::HashMap;

use crate::traits::*;
use crate::types::*;

/// Mapping from car identifier to its pricing attributes
///
/// Populated before any event is logged and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct FleetCatalog {
    cars: HashMap<String, Car>,
}

impl FleetCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a car, overwriting any previous car with the same identifier
    pub fn register(&mut self, car: Car) {
        self.cars.insert(car.id.clone(), car);
    }

    /// Look up a car by identifier
    pub fn lookup(&self, car_id: &str) -> Option<&Car> {
        self.cars.get(car_id)
    }

    /// Look up a car, failing with [`RentalError::UnknownCar`] if it is not registered
    pub fn lookup_required(&self, car_id: &str) -> RentalResult<&Car> {
        self.get_car_required(car_id)
    }

    pub fn contains(&self, car_id: &str) -> bool {
        self.cars.contains_key(car_id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl FromIterator<Car> for FleetCatalog {
    fn from_iter<I: IntoIterator<Item = Car>>(iter: I) -> Self {
        let mut catalog = FleetCatalog::new();
        for car in iter {
            catalog.register(car);
        }
        catalog
    }
}

impl FleetStorage for FleetCatalog {
    fn save_car(&mut self, car: Car) -> RentalResult<()> {
        self.register(car);
        Ok(())
    }

    fn get_car(&self, car_id: &str) -> Option<&Car> {
        self.lookup(car_id)
    }

    fn list_cars(&self) -> Vec<&Car> {
        let mut cars: Vec<&Car> = self.cars.values().collect();
        cars.sort_by(|a, b| a.id.cmp(&b.id));
        cars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = FleetCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(Car::new("tesla", 1000, 50, 2));
        let car = catalog.lookup("tesla").unwrap();
        assert_eq!(car.pick_up_fee, 50);
        assert!(catalog.lookup("bmw").is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let mut catalog = FleetCatalog::new();
        catalog.register(Car::new("tesla", 1000, 50, 2));
        catalog.register(Car::new("tesla", 2000, 70, 3));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("tesla").unwrap().catalog_price, 2000);
    }

    #[test]
    fn test_lookup_required_unknown_car() {
        let catalog = FleetCatalog::new();
        match catalog.lookup_required("ghost") {
            Err(RentalError::UnknownCar(id)) => assert_eq!(id, "ghost"),
            other => panic!("expected UnknownCar, got {:?}", other),
        }
    }

    #[test]
    fn test_list_cars_sorted() {
        let catalog: FleetCatalog = vec![
            Car::new("volvo", 10, 1, 1),
            Car::new("audi", 10, 1, 1),
            Car::new("mazda", 10, 1, 1),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = catalog.list_cars().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["audi", "mazda", "volvo"]);
    }
}
