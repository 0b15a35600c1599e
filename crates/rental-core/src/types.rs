//! # Domain Types
//!
//! Core domain types used throughout the rental desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Customer     │   │     Rental      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (C001)      │   │  id (CUS1)      │   │  id (UUID)      │       │
//! │  │  price_per_day  │   │  name           │   │  car_id ────────┼──► Car│
//! │  │  available      │   │  license_number │   │  customer_id ───┼──► Cus│
//! │  └─────────────────┘   └─────────────────┘   │  status         │       │
//! │                                              │  total_price    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A Rental references its car and customer by id. It never owns them, so
//! dropping the ledger leaves the fleet and the customer registry intact.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, RentalError};
use crate::money::Money;
use crate::period::RentalPeriod;
use crate::pricing::PriceQuote;

// =============================================================================
// Identifiers
// =============================================================================

/// Fleet identifier of a car, assigned when the fleet is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarId(String);

impl CarId {
    pub fn new(id: impl Into<String>) -> Self {
        CarId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CarId {
    fn from(id: &str) -> Self {
        CarId::new(id)
    }
}

/// Customer identifier, e.g. `CUS1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerId(String);

impl CustomerId {
    /// Builds the id for the `seq`-th registration.
    pub fn sequential(prefix: &str, seq: u64) -> Self {
        CustomerId(format!("{}{}", prefix, seq))
    }

    pub fn new(id: impl Into<String>) -> Self {
        CustomerId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        CustomerId::new(id)
    }
}

// =============================================================================
// Car Attributes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
    Cng,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
            FuelType::Cng => "CNG",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transmission::Manual => f.write_str("Manual"),
            Transmission::Automatic => f.write_str("Automatic"),
        }
    }
}

// =============================================================================
// Car
// =============================================================================

/// Input for loading a car into the fleet.
///
/// Validated by [`crate::validation::validate_new_car`] before it becomes a
/// [`Car`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: Money,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    /// Odometer reading in kilometres.
    pub mileage: u32,
    pub vehicle_type: String,
    pub seating_capacity: u8,
    pub color: String,
    pub registration_number: String,
}

/// A car in the rental fleet.
///
/// ## Mutability
/// Every descriptive field is fixed at fleet load. `available` is the only
/// thing that changes, and only the booking engine flips it: the fleet
/// registry hands out shared references to everyone else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub brand: String,
    pub model: String,
    pub price_per_day: Money,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub mileage: u32,
    pub vehicle_type: String,
    pub seating_capacity: u8,
    pub color: String,
    pub registration_number: String,
    available: bool,
}

impl Car {
    /// Builds an available car from already-validated input.
    pub(crate) fn from_validated(new_car: NewCar) -> Self {
        Car {
            id: CarId::new(new_car.car_id),
            brand: new_car.brand,
            model: new_car.model,
            price_per_day: new_car.price_per_day,
            fuel_type: new_car.fuel_type,
            transmission: new_car.transmission,
            mileage: new_car.mileage,
            vehicle_type: new_car.vehicle_type,
            seating_capacity: new_car.seating_capacity,
            color: new_car.color,
            registration_number: new_car.registration_number,
            available: true,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Flips the car to rented. Called by the booking engine only.
    pub fn mark_rented(&mut self) {
        self.available = false;
    }

    /// Flips the car back to available. Called by the booking engine only.
    pub fn mark_returned(&mut self) {
        self.available = true;
    }
}

/// One row of the available-cars table handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CarRow {
    pub car_id: CarId,
    pub brand: String,
    pub model: String,
    pub price_per_day: Money,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub mileage: u32,
    pub vehicle_type: String,
    pub seats: u8,
    pub color: String,
    pub registration_number: String,
}

impl From<&Car> for CarRow {
    fn from(car: &Car) -> Self {
        CarRow {
            car_id: car.id.clone(),
            brand: car.brand.clone(),
            model: car.model.clone(),
            price_per_day: car.price_per_day,
            fuel_type: car.fuel_type,
            transmission: car.transmission,
            mileage: car.mileage,
            vehicle_type: car.vehicle_type.clone(),
            seats: car.seating_capacity,
            color: car.color.clone(),
            registration_number: car.registration_number.clone(),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Walk-in customer details as typed by the operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub contact_number: String,
    pub license_number: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        license_number: impl Into<String>,
    ) -> Self {
        NewCustomer {
            name: name.into(),
            contact_number: contact_number.into(),
            license_number: license_number.into(),
        }
    }
}

/// A registered customer. Append-only: never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact_number: String,
    pub license_number: String,
}

impl Customer {
    /// Attaches an id to validated (trimmed) customer details.
    pub fn new(id: CustomerId, details: NewCustomer) -> Self {
        Customer {
            id,
            name: details.name,
            contact_number: details.contact_number,
            license_number: details.license_number,
        }
    }
}

// =============================================================================
// Rental Status
// =============================================================================

/// Lifecycle of a rental: `Active` → `Returned`, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    /// Car is out with the customer.
    #[default]
    Active,
    /// Car has been brought back. Kept as history.
    Returned,
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalStatus::Active => f.write_str("active"),
            RentalStatus::Returned => f.write_str("returned"),
        }
    }
}

// =============================================================================
// Rental
// =============================================================================

/// One booking of one car by one customer.
///
/// Uses the snapshot pattern: the daily rate and insurance fee are frozen at
/// booking time, so the charged total can always be re-derived from the
/// rental alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    id: String,
    car_id: CarId,
    customer_id: CustomerId,
    #[ts(as = "String")]
    start_date: NaiveDate,
    #[ts(as = "String")]
    end_date: NaiveDate,
    insured: bool,
    quote: PriceQuote,
    status: RentalStatus,
    #[ts(as = "String")]
    booked_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    returned_at: Option<DateTime<Utc>>,
}

impl Rental {
    /// Opens an active rental. The booking engine is responsible for having
    /// checked availability first.
    pub fn open(
        car: &Car,
        customer: &Customer,
        period: RentalPeriod,
        quote: PriceQuote,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Rental {
            id: Uuid::new_v4().to_string(),
            car_id: car.id.clone(),
            customer_id: customer.id.clone(),
            start_date: period.start(),
            end_date: period.end(),
            insured: quote.insured,
            quote,
            status: RentalStatus::Active,
            booked_at,
            returned_at: None,
        }
    }

    /// Transitions `Active` → `Returned`.
    ///
    /// ## Errors
    /// `InvalidRentalStatus` if the rental was already returned.
    pub fn mark_returned(&mut self, at: DateTime<Utc>) -> CoreResult<()> {
        if self.status != RentalStatus::Active {
            return Err(RentalError::InvalidRentalStatus {
                rental_id: self.id.clone(),
                current_status: self.status,
            });
        }
        self.status = RentalStatus::Returned;
        self.returned_at = Some(at);
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn car_id(&self) -> &CarId {
        &self.car_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn insured(&self) -> bool {
        self.insured
    }

    /// Price breakdown frozen at booking time.
    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    /// The amount charged.
    pub fn total_price(&self) -> Money {
        self.quote.total
    }

    pub fn status(&self) -> RentalStatus {
        self.status
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_car() -> Car {
        Car::from_validated(NewCar {
            car_id: "C001".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            price_per_day: Money::from_major_minor(50, 0),
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            mileage: 42_000,
            vehicle_type: "Sedan".to_string(),
            seating_capacity: 5,
            color: "White".to_string(),
            registration_number: "KA-01-AB-1234".to_string(),
        })
    }

    fn test_customer() -> Customer {
        Customer::new(
            CustomerId::sequential("CUS", 1),
            NewCustomer::new("Asha Rao", "555-0101", "DL-7781"),
        )
    }

    #[test]
    fn test_customer_id_sequential() {
        assert_eq!(CustomerId::sequential("CUS", 12).as_str(), "CUS12");
    }

    #[test]
    fn test_car_starts_available() {
        let mut car = test_car();
        assert!(car.is_available());
        car.mark_rented();
        assert!(!car.is_available());
        car.mark_returned();
        assert!(car.is_available());
    }

    #[test]
    fn test_car_row_columns() {
        let row = CarRow::from(&test_car());
        assert_eq!(row.car_id.as_str(), "C001");
        assert_eq!(row.seats, 5);
        assert_eq!(row.price_per_day.cents(), 5000);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["carId"], "C001");
        assert_eq!(json["fuelType"], "petrol");
        assert_eq!(json["registrationNumber"], "KA-01-AB-1234");
    }

    #[test]
    fn test_rental_returns_exactly_once() {
        let car = test_car();
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        let quote = PriceQuote::compute(car.price_per_day, Money::from_cents(1000), &period, true)
            .unwrap();
        let booked_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut rental = Rental::open(&car, &test_customer(), period, quote, booked_at);

        assert!(rental.is_active());
        assert_eq!(rental.total_price().cents(), 24000);
        assert_eq!(rental.car_id(), &car.id);

        let returned_at = Utc.with_ymd_and_hms(2024, 1, 5, 17, 0, 0).unwrap();
        rental.mark_returned(returned_at).unwrap();
        assert_eq!(rental.status(), RentalStatus::Returned);
        assert_eq!(rental.returned_at(), Some(returned_at));

        let err = rental.mark_returned(returned_at).unwrap_err();
        assert!(matches!(err, RentalError::InvalidRentalStatus { .. }));
    }

    #[test]
    fn test_rental_status_default() {
        assert_eq!(RentalStatus::default(), RentalStatus::Active);
    }
}
