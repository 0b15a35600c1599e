//! # Rental System Facade
//!
//! The single entry point for presentation. It parses and validates raw
//! operator input, then delegates to the registries and the booking engine.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation            RentalSystem                 RentalStore       │
//! │  ────────────            ────────────                 ───────────       │
//! │                                                                         │
//! │  Refresh ──────────────► list_available_cars() ─────► fleet (read)      │
//! │                                                                         │
//! │  Rent (selected row) ──► quote_rental() ────────────► ledger.prepare    │
//! │        │ confirm                                                        │
//! │        ▼                                                                │
//! │                          book_walk_in() ───lock──────► validate all     │
//! │                                                        register         │
//! │                                                        ledger.commit    │
//! │                                                                         │
//! │  Return (typed id) ────► return_car() ─────lock──────► ledger.return    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The store sits behind one `Mutex`. Every operation holds the lock from
//! its first check to its last write, so two concurrent rents of the same
//! car can never both observe it available.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info};

use rental_core::validation::{validate_car_id, validate_new_customer};
use rental_core::{
    Car, CarId, CarRow, Clock, CoreResult, Customer, CustomerId, Money, NewCustomer, PriceQuote,
    Rental, RentalError, RentalPeriod, SystemClock,
};

use crate::config::RentalConfig;
use crate::customers::CustomerRegistry;
use crate::fleet::FleetRegistry;
use crate::ledger::{RentRequest, ReturnOutcome};
use crate::store::RentalStore;

/// A walk-in booking: the customer registered for it and the rental.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkInBooking {
    pub customer: Customer,
    pub rental: Rental,
}

pub struct RentalSystem {
    store: Mutex<RentalStore>,
    config: RentalConfig,
    clock: Arc<dyn Clock>,
}

impl RentalSystem {
    /// Builds the desk around a loaded fleet, using the system clock.
    pub fn new(fleet: FleetRegistry, config: RentalConfig) -> Self {
        let customers = CustomerRegistry::with_prefix(config.customer_id_prefix.clone());
        RentalSystem::from_store(RentalStore::new(fleet, customers), config, Arc::new(SystemClock))
    }

    /// Builds the desk around an existing store and clock.
    pub fn from_store(store: RentalStore, config: RentalConfig, clock: Arc<dyn Clock>) -> Self {
        info!(
            cars = store.fleet().len(),
            insurance_fee_per_day = %config.insurance_fee_per_day,
            "Rental desk ready"
        );
        RentalSystem {
            store: Mutex::new(store),
            config,
            clock,
        }
    }

    /// Every mutation is all-or-nothing, so a panic elsewhere cannot leave
    /// a half-applied booking behind and the store stays usable.
    fn lock(&self) -> MutexGuard<'_, RentalStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs a read-only closure against the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RentalStore) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    pub fn insurance_fee_per_day(&self) -> Money {
        self.config.insurance_fee_per_day
    }

    // =========================================================================
    // Fleet
    // =========================================================================

    /// Table rows for every available car, in fleet order.
    pub fn list_available_cars(&self) -> Vec<CarRow> {
        self.lock().fleet.list_available().map(CarRow::from).collect()
    }

    /// Looks up a car by a typed id. Blank or unknown ids give `None`.
    pub fn find_car_by_id(&self, car_id: &str) -> Option<Car> {
        let car_id = validate_car_id(car_id).ok()?;
        let found = self.lock().fleet.find_by_id(&car_id).cloned();
        debug!(%car_id, found = found.is_some(), "Car lookup");
        found
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Registers a customer.
    ///
    /// ## Errors
    /// `Validation` if any field is blank; the customer count is unchanged.
    pub fn register_customer(
        &self,
        name: &str,
        contact_number: &str,
        license_number: &str,
    ) -> CoreResult<Customer> {
        let details = NewCustomer::new(name, contact_number, license_number);
        let customer = self.lock().customers.register(&details)?;
        info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    pub fn find_customer_by_id(&self, customer_id: &CustomerId) -> Option<Customer> {
        self.lock().customers.find_by_id(customer_id).cloned()
    }

    /// All customers in registration order.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.lock().customers.list().to_vec()
    }

    // =========================================================================
    // Booking
    // =========================================================================

    /// Prices a rental without booking it, for the confirmation prompt.
    ///
    /// ## Errors
    /// Same checks as [`RentalSystem::rent_car`] minus the customer.
    pub fn quote_rental(
        &self,
        car_id: &str,
        start_date: &str,
        end_date: &str,
        insured: bool,
    ) -> CoreResult<PriceQuote> {
        let car_id = car_id_of(car_id)?;
        let period = RentalPeriod::parse(start_date, end_date)?;

        let store = self.lock();
        store.ledger.prepare(
            &store.fleet,
            &car_id,
            &period,
            insured,
            self.config.insurance_fee_per_day,
        )
    }

    /// Rents a car to an already registered customer.
    ///
    /// ## Returns
    /// The new active rental; `total_price()` is the amount charged.
    ///
    /// ## Errors
    /// `CarNotFound`, `CarUnavailable`, `InvalidDateRange`,
    /// `CustomerNotFound`, `Booking`. No state changes on any of them.
    pub fn rent_car(
        &self,
        car_id: &str,
        customer_id: &CustomerId,
        start_date: &str,
        end_date: &str,
        insured: bool,
    ) -> CoreResult<Rental> {
        let request = RentRequest {
            car_id: car_id_of(car_id)?,
            customer_id: customer_id.clone(),
            period: RentalPeriod::parse(start_date, end_date)?,
            insured,
        };

        let now = self.clock.now();
        let mut guard = self.lock();
        let store = &mut *guard;
        store.ledger.rent(
            &mut store.fleet,
            &store.customers,
            &request,
            self.config.insurance_fee_per_day,
            now,
        )
    }

    /// Registers a walk-in customer and rents them a car in one step.
    ///
    /// Every input is validated and the car is checked before the customer
    /// is registered, so a failed booking leaves no customer behind.
    pub fn book_walk_in(
        &self,
        details: &NewCustomer,
        car_id: &str,
        start_date: &str,
        end_date: &str,
        insured: bool,
    ) -> CoreResult<WalkInBooking> {
        let valid = validate_new_customer(details)?;
        let car_id = car_id_of(car_id)?;
        let period = RentalPeriod::parse(start_date, end_date)?;

        let now = self.clock.now();
        let mut guard = self.lock();
        let store = &mut *guard;

        let quote = store.ledger.prepare(
            &store.fleet,
            &car_id,
            &period,
            insured,
            self.config.insurance_fee_per_day,
        )?;

        let customer = store.customers.insert_validated(valid);
        info!(customer_id = %customer.id, "Customer registered");

        let rental = store
            .ledger
            .commit(&mut store.fleet, &customer, &car_id, period, quote, now)?;

        Ok(WalkInBooking { customer, rental })
    }

    /// Marks a car returned.
    ///
    /// ## Errors
    /// `CarNotFound` for an id that matches no car. A known car without an
    /// active rental yields `Ok(ReturnOutcome::NotRented)`.
    pub fn return_car(&self, car_id: &str) -> CoreResult<ReturnOutcome> {
        let car_id = car_id_of(car_id)?;

        let now = self.clock.now();
        let mut guard = self.lock();
        let store = &mut *guard;
        store.ledger.return_car(&mut store.fleet, &car_id, now)
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Every rental, active and returned, in booking order.
    pub fn rental_history(&self) -> Vec<Rental> {
        self.lock().ledger.rentals().to_vec()
    }

    pub fn active_rentals(&self) -> Vec<Rental> {
        self.lock().ledger.active_rentals().cloned().collect()
    }
}

/// Resolves a typed car id. An id no car could ever have (blank, oversized)
/// is reported the same way as any other unknown id.
fn car_id_of(input: &str) -> CoreResult<CarId> {
    validate_car_id(input).map_err(|_| RentalError::CarNotFound(CarId::new(input.trim())))
}

impl std::fmt::Debug for RentalSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RentalSystem")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_fleet;
    use chrono::{TimeZone, Utc};
    use rental_core::{FixedClock, RentalStatus};

    fn system() -> RentalSystem {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
        RentalSystem::from_store(
            RentalStore::new(demo_fleet().unwrap(), CustomerRegistry::default()),
            RentalConfig::default(),
            Arc::new(clock),
        )
    }

    #[test]
    fn test_rent_removes_car_from_listing() {
        let desk = system();
        let before = desk.list_available_cars().len();
        let customer = desk
            .register_customer("Asha Rao", "555-0101", "DL-7781")
            .unwrap();

        desk.rent_car("C001", &customer.id, "2024-01-01", "2024-01-03", false)
            .unwrap();

        let rows = desk.list_available_cars();
        assert_eq!(rows.len(), before - 1);
        assert!(rows.iter().all(|row| row.car_id.as_str() != "C001"));
        assert!(!desk.find_car_by_id("C001").unwrap().is_available());
    }

    #[test]
    fn test_quote_matches_rent() {
        let desk = system();
        let customer = desk.register_customer("Asha", "555", "DL").unwrap();

        let quote = desk
            .quote_rental("C001", "2024-01-01", "2024-01-05", true)
            .unwrap();
        let rental = desk
            .rent_car("C001", &customer.id, "2024-01-01", "2024-01-05", true)
            .unwrap();

        assert_eq!(quote.total, rental.total_price());
        assert_eq!(rental.quote(), &quote);
    }

    #[test]
    fn test_find_car_by_id_trims_and_handles_blank() {
        let desk = system();
        assert!(desk.find_car_by_id(" C002 ").is_some());
        assert!(desk.find_car_by_id("").is_none());
        assert!(desk.find_car_by_id("C404").is_none());
    }

    #[test]
    fn test_return_blank_id_is_car_not_found() {
        let desk = system();
        let err = desk.return_car("   ").unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));
    }

    #[test]
    fn test_walk_in_booking() {
        let desk = system();
        let booking = desk
            .book_walk_in(
                &NewCustomer::new("Ben Okafor", "555-0199", "DL-2231"),
                "C003",
                "2024-02-10",
                "2024-02-12",
                false,
            )
            .unwrap();

        assert_eq!(booking.customer.id.as_str(), "CUS1");
        assert_eq!(booking.rental.customer_id(), &booking.customer.id);
        assert_eq!(booking.rental.status(), RentalStatus::Active);
        assert_eq!(booking.rental.total_price().cents(), 2 * 6500);
        assert_eq!(desk.list_customers().len(), 1);
    }

    #[test]
    fn test_failed_walk_in_registers_nobody() {
        let desk = system();
        let details = NewCustomer::new("Ben", "555-0199", "DL-2231");

        let err = desk
            .book_walk_in(&details, "C003", "2024-02-12", "2024-02-10", false)
            .unwrap_err();
        assert!(matches!(err, RentalError::InvalidDateRange { .. }));

        let err = desk
            .book_walk_in(&details, "C999", "2024-02-10", "2024-02-12", false)
            .unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));

        assert!(desk.list_customers().is_empty());
        assert!(desk.rental_history().is_empty());
    }

    #[test]
    fn test_blank_car_id_is_car_not_found_for_quote_and_walk_in() {
        let desk = system();
        let details = NewCustomer::new("Ben", "555-0199", "DL-2231");

        let err = desk.quote_rental(" ", "2024-02-10", "2024-02-12", true).unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));

        let err = desk
            .book_walk_in(&details, "", "2024-02-10", "2024-02-12", false)
            .unwrap_err();
        assert!(matches!(err, RentalError::CarNotFound(_)));
        assert!(desk.list_customers().is_empty());
    }

    #[test]
    fn test_history_and_active_rentals() {
        let desk = system();
        let customer = desk.register_customer("Asha", "555", "DL").unwrap();
        desk.rent_car("C001", &customer.id, "2024-01-01", "2024-01-02", false)
            .unwrap();
        desk.rent_car("C002", &customer.id, "2024-01-01", "2024-01-02", false)
            .unwrap();
        desk.return_car("C001").unwrap();

        assert_eq!(desk.rental_history().len(), 2);
        let active = desk.active_rentals();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].car_id().as_str(), "C002");
    }
}
