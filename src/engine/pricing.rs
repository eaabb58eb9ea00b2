//! Per-event price contributions

use bigdecimal::{BigDecimal, One, ToPrimitive};

use crate::types::*;

/// Round a non-negative value to the nearest integer, ties up, and bump by one if that lands below
/// `value`
///
/// Computed liability never underestimates: every non-integral value ends up on the next integer.
pub fn round_up(value: &BigDecimal) -> BigDecimal {
    let half = BigDecimal::one() / BigDecimal::from(2);
    let rounded = (value + &half).with_scale(0);
    if &rounded < value {
        rounded + BigDecimal::one()
    } else {
        rounded
    }
}

/// Liability for an accident of `severity` percent on a car with the given catalog price
pub fn accident_liability(severity: u8, catalog_price: u64) -> RentalResult<u64> {
    let exact =
        (BigDecimal::from(severity) * BigDecimal::from(catalog_price)) / BigDecimal::from(100);

    round_up(&exact).to_u64().ok_or_else(|| {
        RentalError::Internal(format!(
            "Accident liability {} does not fit a price",
            exact
        ))
    })
}

impl Event {
    /// Amount this event adds to its rental procedure, priced against the procedure's car
    pub fn price_contribution(&self, car: &Car) -> RentalResult<u64> {
        match self {
            Event::PickUp { car_id, .. } => {
                if *car_id != car.id {
                    return Err(RentalError::Internal(format!(
                        "Pick-up of '{}' priced against car '{}'",
                        car_id, car.id
                    )));
                }
                Ok(car.pick_up_fee)
            }
            Event::Return { distance, .. } => {
                distance.checked_mul(car.cost_per_km).ok_or_else(|| {
                    RentalError::Internal(format!(
                        "Mileage charge overflow: {} km at {} per km",
                        distance, car.cost_per_km
                    ))
                })
            }
            Event::Accident { severity, .. } => accident_liability(*severity, car.catalog_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_round_up_integral_value_unchanged() {
        assert_eq!(round_up(&decimal("100")), BigDecimal::from(100));
        assert_eq!(round_up(&decimal("0")), BigDecimal::from(0));
    }

    #[test]
    fn test_round_up_tie_goes_up() {
        assert_eq!(round_up(&decimal("50.5")), BigDecimal::from(51));
    }

    #[test]
    fn test_round_up_bumps_values_rounded_down() {
        assert_eq!(round_up(&decimal("50.3")), BigDecimal::from(51));
        assert_eq!(round_up(&decimal("0.01")), BigDecimal::from(1));
        assert_eq!(round_up(&decimal("50.7")), BigDecimal::from(51));
    }

    #[test]
    fn test_accident_liability() {
        assert_eq!(accident_liability(50, 101).unwrap(), 51);
        assert_eq!(accident_liability(10, 1000).unwrap(), 100);
        assert_eq!(accident_liability(0, 1000).unwrap(), 0);
        assert_eq!(accident_liability(100, 99999).unwrap(), 99999);
        assert_eq!(accident_liability(33, 10).unwrap(), 4); // 3.3
    }

    #[test]
    fn test_price_contribution_per_kind() {
        let car = Car::new("tesla", 1000, 50, 2);

        assert_eq!(Event::pick_up(0, "ann", "tesla").price_contribution(&car).unwrap(), 50);
        assert_eq!(Event::return_car(2, "ann", 30).price_contribution(&car).unwrap(), 60);
        assert_eq!(Event::accident(1, "ann", 10).price_contribution(&car).unwrap(), 100);
        assert_eq!(Event::return_car(2, "ann", 0).price_contribution(&car).unwrap(), 0);
    }

    #[test]
    fn test_pick_up_priced_against_other_car() {
        let car = Car::new("tesla", 1000, 50, 2);
        let result = Event::pick_up(0, "ann", "volvo").price_contribution(&car);
        assert!(matches!(result, Err(RentalError::Internal(_))));
    }
}
