//! # Rental Ledger / Booking Engine
//!
//! Owns every rental ever made and enforces the one rule the desk exists
//! for: a car has at most one active rental at any time.
//!
//! ## Availability State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              rent (car found, dates valid, customer known)              │
//! │   ┌───────────┐ ─────────────────────────────────────────► ┌─────────┐ │
//! │   │ Available │                                            │ Rented  │ │
//! │   └───────────┘ ◄───────────────────────────────────────── └─────────┘ │
//! │        │  ▲              return (active rental found)           │      │
//! │        │  │                                                     │      │
//! │        └──┘ return → NotRented (no-op)          rent → CarUnavailable  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-Nothing
//! Booking is split into [`RentalLedger::prepare`] (every check, no
//! mutation) and [`RentalLedger::commit`] (mutation only). A failure in
//! `prepare` leaves the fleet and the ledger exactly as they were.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use rental_core::{
    CarId, CoreResult, Customer, CustomerId, Money, PriceQuote, Rental, RentalError,
    RentalPeriod,
};

use crate::customers::CustomerRegistry;
use crate::fleet::FleetRegistry;

/// A validated request to rent one car.
#[derive(Debug, Clone)]
pub struct RentRequest {
    pub car_id: CarId,
    pub customer_id: CustomerId,
    pub period: RentalPeriod,
    pub insured: bool,
}

/// Result of a return attempt on an existing car.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    /// The active rental was closed and the car is available again.
    Returned { rental: Rental },
    /// The car exists but had no active rental. Nothing changed.
    NotRented { car_id: CarId },
}

impl ReturnOutcome {
    pub fn is_returned(&self) -> bool {
        matches!(self, ReturnOutcome::Returned { .. })
    }

    /// Operator-facing summary.
    pub fn message(&self) -> String {
        match self {
            ReturnOutcome::Returned { rental } => {
                format!("Car {} returned", rental.car_id())
            }
            ReturnOutcome::NotRented { car_id } => {
                format!("Car {} was not rented", car_id)
            }
        }
    }
}

/// Rental history plus the active-rental index.
#[derive(Debug, Clone, Default)]
pub struct RentalLedger {
    rentals: Vec<Rental>,
    active_by_car: HashMap<CarId, usize>,
}

impl RentalLedger {
    pub fn new() -> Self {
        RentalLedger::default()
    }

    /// Rents a car to a registered customer.
    ///
    /// ## Guarantees
    /// On success exactly one new active rental exists and the car is
    /// unavailable. On failure nothing changed.
    ///
    /// ## Errors
    /// - `CarNotFound` / `CarUnavailable` for the car
    /// - `CustomerNotFound` if the customer was never registered
    /// - `Booking` if the price overflows
    pub fn rent(
        &mut self,
        fleet: &mut FleetRegistry,
        customers: &CustomerRegistry,
        request: &RentRequest,
        insurance_fee_per_day: Money,
        now: DateTime<Utc>,
    ) -> CoreResult<Rental> {
        let quote = self.prepare(
            fleet,
            &request.car_id,
            &request.period,
            request.insured,
            insurance_fee_per_day,
        )?;

        let customer = customers.find_by_id(&request.customer_id).ok_or_else(|| {
            warn!(customer_id = %request.customer_id, "Rent rejected: unknown customer");
            RentalError::CustomerNotFound(request.customer_id.clone())
        })?;

        self.commit(fleet, customer, &request.car_id, request.period, quote, now)
    }

    /// Runs every booking check for a car and prices the rental, without
    /// touching any state.
    pub fn prepare(
        &self,
        fleet: &FleetRegistry,
        car_id: &CarId,
        period: &RentalPeriod,
        insured: bool,
        insurance_fee_per_day: Money,
    ) -> CoreResult<PriceQuote> {
        let car = fleet.find_by_id(car_id).ok_or_else(|| {
            warn!(%car_id, "Booking rejected: unknown car");
            RentalError::CarNotFound(car_id.clone())
        })?;

        if !car.is_available() || self.active_by_car.contains_key(car_id) {
            warn!(%car_id, "Booking rejected: car already rented");
            return Err(RentalError::CarUnavailable(car_id.clone()));
        }

        let quote = PriceQuote::compute(car.price_per_day, insurance_fee_per_day, period, insured)?;
        debug!(
            %car_id,
            days = quote.billable_days,
            insured,
            total = %quote.total,
            "Booking priced"
        );
        Ok(quote)
    }

    /// Records a prepared booking. Must run under the same exclusive borrow
    /// as the [`RentalLedger::prepare`] call that produced `quote`.
    pub(crate) fn commit(
        &mut self,
        fleet: &mut FleetRegistry,
        customer: &Customer,
        car_id: &CarId,
        period: RentalPeriod,
        quote: PriceQuote,
        now: DateTime<Utc>,
    ) -> CoreResult<Rental> {
        let car = fleet
            .find_by_id_mut(car_id)
            .ok_or_else(|| RentalError::CarNotFound(car_id.clone()))?;

        let rental = Rental::open(car, customer, period, quote, now);
        car.mark_rented();

        self.active_by_car.insert(car_id.clone(), self.rentals.len());
        self.rentals.push(rental.clone());

        info!(
            rental_id = rental.id(),
            %car_id,
            customer_id = %customer.id,
            start = %rental.start_date(),
            end = %rental.end_date(),
            total = %rental.total_price(),
            "Car rented"
        );
        Ok(rental)
    }

    /// Closes the active rental of a car.
    ///
    /// ## Errors
    /// `CarNotFound` if no car has this id. A known car with no active
    /// rental is `Ok(NotRented)`, not an error.
    pub fn return_car(
        &mut self,
        fleet: &mut FleetRegistry,
        car_id: &CarId,
        now: DateTime<Utc>,
    ) -> CoreResult<ReturnOutcome> {
        let car = fleet.find_by_id_mut(car_id).ok_or_else(|| {
            warn!(%car_id, "Return rejected: unknown car");
            RentalError::CarNotFound(car_id.clone())
        })?;

        let Some(&index) = self.active_by_car.get(car_id) else {
            info!(%car_id, "Return ignored: car was not rented");
            return Ok(ReturnOutcome::NotRented {
                car_id: car_id.clone(),
            });
        };

        let rental = &mut self.rentals[index];
        rental.mark_returned(now)?;
        self.active_by_car.remove(car_id);
        car.mark_returned();

        info!(rental_id = rental.id(), %car_id, "Car returned");
        Ok(ReturnOutcome::Returned {
            rental: rental.clone(),
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every rental in booking order, active and returned.
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    pub fn active_rental_for(&self, car_id: &CarId) -> Option<&Rental> {
        self.active_by_car.get(car_id).map(|&i| &self.rentals[i])
    }

    pub fn active_rentals(&self) -> impl Iterator<Item = &Rental> + '_ {
        self.rentals.iter().filter(|rental| rental.is_active())
    }

    pub fn history_for_car<'a>(
        &'a self,
        car_id: &'a CarId,
    ) -> impl Iterator<Item = &'a Rental> + 'a {
        self.rentals
            .iter()
            .filter(move |rental| rental.car_id() == car_id)
    }

    pub fn rentals_for_customer<'a>(
        &'a self,
        customer_id: &'a CustomerId,
    ) -> impl Iterator<Item = &'a Rental> + 'a {
        self.rentals
            .iter()
            .filter(move |rental| rental.customer_id() == customer_id)
    }

    pub fn active_count(&self) -> usize {
        self.active_by_car.len()
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_cars;
    use chrono::TimeZone;
    use rental_core::{NewCustomer, RentalStatus, DEFAULT_INSURANCE_FEE_PER_DAY};

    struct Fixture {
        fleet: FleetRegistry,
        customers: CustomerRegistry,
        ledger: RentalLedger,
        customer_id: CustomerId,
    }

    fn fixture() -> Fixture {
        let fleet = FleetRegistry::load(demo_cars()).unwrap();
        let mut customers = CustomerRegistry::default();
        let customer = customers
            .register(&NewCustomer::new("Asha Rao", "555-0101", "DL-7781"))
            .unwrap();
        Fixture {
            fleet,
            customers,
            ledger: RentalLedger::new(),
            customer_id: customer.id,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
    }

    fn request(f: &Fixture, car: &str, start: &str, end: &str, insured: bool) -> RentRequest {
        RentRequest {
            car_id: CarId::new(car),
            customer_id: f.customer_id.clone(),
            period: RentalPeriod::parse(start, end).unwrap(),
            insured,
        }
    }

    #[test]
    fn test_rent_marks_car_unavailable() {
        let mut f = fixture();
        let req = request(&f, "C001", "2024-01-01", "2024-01-03", false);

        let rental = f
            .ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap();

        assert_eq!(rental.status(), RentalStatus::Active);
        assert_eq!(rental.booked_at(), now());
        assert!(!f.fleet.find_by_id(&req.car_id).unwrap().is_available());
        assert_eq!(f.ledger.active_rental_for(&req.car_id), Some(&rental));
        assert_eq!(f.ledger.active_count(), 1);
    }

    #[test]
    fn test_double_booking_rejected_and_ledger_unchanged() {
        let mut f = fixture();
        let req = request(&f, "C001", "2024-01-01", "2024-01-03", false);
        f.ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap();

        let err = f
            .ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap_err();

        assert!(matches!(err, RentalError::CarUnavailable(ref id) if id.as_str() == "C001"));
        assert_eq!(f.ledger.len(), 1);
    }

    #[test]
    fn test_unknown_car_and_customer() {
        let mut f = fixture();
        let req = request(&f, "C999", "2024-01-01", "2024-01-03", false);
        let err = f
            .ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));

        let mut req = request(&f, "C001", "2024-01-01", "2024-01-03", false);
        req.customer_id = CustomerId::new("CUS42");
        let err = f
            .ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap_err();
        assert!(matches!(err, RentalError::CustomerNotFound(_)));

        assert!(f.ledger.is_empty());
        assert!(f.fleet.find_by_id(&req.car_id).unwrap().is_available());
    }

    #[test]
    fn test_return_flow() {
        let mut f = fixture();
        let req = request(&f, "C002", "2024-01-01", "2024-01-05", true);
        f.ledger
            .rent(&mut f.fleet, &f.customers, &req, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap();

        let returned_at = Utc.with_ymd_and_hms(2024, 1, 5, 18, 0, 0).unwrap();
        let outcome = f
            .ledger
            .return_car(&mut f.fleet, &req.car_id, returned_at)
            .unwrap();

        let ReturnOutcome::Returned { rental } = outcome else {
            panic!("expected the car to be returned");
        };
        assert_eq!(rental.status(), RentalStatus::Returned);
        assert_eq!(rental.returned_at(), Some(returned_at));
        assert!(f.fleet.find_by_id(&req.car_id).unwrap().is_available());
        assert_eq!(f.ledger.active_count(), 0);

        // Second return is a reported no-op
        let again = f
            .ledger
            .return_car(&mut f.fleet, &req.car_id, returned_at)
            .unwrap();
        assert_eq!(
            again,
            ReturnOutcome::NotRented {
                car_id: req.car_id.clone()
            }
        );
        assert_eq!(f.ledger.history_for_car(&req.car_id).count(), 1);
    }

    #[test]
    fn test_return_unknown_car() {
        let mut f = fixture();
        let err = f
            .ledger
            .return_car(&mut f.fleet, &CarId::new("NOPE"), now())
            .unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));
    }

    #[test]
    fn test_car_can_be_rented_again_after_return() {
        let mut f = fixture();
        let first = request(&f, "C003", "2024-01-01", "2024-01-02", false);
        let second = request(&f, "C003", "2024-01-03", "2024-01-04", false);

        f.ledger
            .rent(&mut f.fleet, &f.customers, &first, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap();
        f.ledger
            .return_car(&mut f.fleet, &first.car_id, now())
            .unwrap();
        f.ledger
            .rent(&mut f.fleet, &f.customers, &second, DEFAULT_INSURANCE_FEE_PER_DAY, now())
            .unwrap();

        assert_eq!(f.ledger.len(), 2);
        assert_eq!(f.ledger.active_rentals().count(), 1);
        assert_eq!(f.ledger.rentals_for_customer(&f.customer_id).count(), 2);
    }
}
