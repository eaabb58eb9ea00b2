//! Splitting a customer's history into rental procedures and pricing them

use crate::traits::*;
use crate::types::*;

fn count_kind(events: &[Event], kind: EventKind) -> usize {
    events.iter().filter(|event| event.is(kind)).count()
}

/// Reconcile one customer's history against the fleet
///
/// A well-formed history is a run of procedures, each a pick-up, any number of accidents and a
/// single return. Malformed histories reconcile to [`Reconciliation::Inconsistent`]; an error is
/// only returned when a pick-up names a car the fleet does not know.
pub fn reconcile<S>(events: &[Event], fleet: &S) -> RentalResult<Reconciliation>
where
    S: FleetStorage + ?Sized,
{
    let (first, last) = match (events.first(), events.last()) {
        (Some(first), Some(last)) if events.len() >= 2 => (first, last),
        _ => return Ok(Reconciliation::Inconsistent),
    };

    let pick_ups = count_kind(events, EventKind::PickUp);
    if pick_ups == 0 || !first.is(EventKind::PickUp) || !last.is(EventKind::Return) {
        return Ok(Reconciliation::Inconsistent);
    }

    if pick_ups == 1 {
        return price_procedure(first, events, fleet);
    }

    let mut total = 0u64;
    let mut start = 0;
    for (idx, event) in events.iter().enumerate().skip(1) {
        if event.is(EventKind::PickUp) {
            match reconcile(&events[start..idx], fleet)? {
                Reconciliation::Price(price) => total = add_price(total, price)?,
                Reconciliation::Inconsistent => return Ok(Reconciliation::Inconsistent),
            }
            start = idx;
        }
    }

    match reconcile(&events[start..], fleet)? {
        Reconciliation::Price(price) => Ok(Reconciliation::Price(add_price(total, price)?)),
        Reconciliation::Inconsistent => Ok(Reconciliation::Inconsistent),
    }
}

/// Price a segment holding exactly one pick-up, which must be `first`
fn price_procedure<S>(first: &Event, events: &[Event], fleet: &S) -> RentalResult<Reconciliation>
where
    S: FleetStorage + ?Sized,
{
    if count_kind(events, EventKind::Return) != 1 {
        return Ok(Reconciliation::Inconsistent);
    }

    let car_id = first.car_id().ok_or_else(|| {
        RentalError::Internal("Procedure does not start with a pick-up".to_string())
    })?;
    let car = fleet.get_car_required(car_id)?;

    let mut total = 0u64;
    for event in events {
        total = add_price(total, event.price_contribution(car)?)?;
    }

    Ok(Reconciliation::Price(total))
}

fn add_price(total: u64, price: u64) -> RentalResult<u64> {
    total
        .checked_add(price)
        .ok_or_else(|| RentalError::Internal("Total price overflow".to_string()))
}
