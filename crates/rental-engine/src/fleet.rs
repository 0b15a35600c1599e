//! # Fleet Registry
//!
//! Owns every car known to the desk and resolves lookups by id.
//!
//! ## Availability Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Who may touch Car.available?                                           │
//! │                                                                         │
//! │  Presentation ──► list_available() / find_by_id()   (&Car, read only)  │
//! │                                                                         │
//! │  RentalLedger ──► find_by_id_mut()                  (crate-private)    │
//! │                   └── mark_rented / mark_returned                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{HashMap, HashSet};

use rental_core::error::ValidationError;
use rental_core::validation::{validate_new_car, ValidationResult};
use rental_core::{Car, CarId, NewCar};

/// The fleet, in load order.
#[derive(Debug, Clone, Default)]
pub struct FleetRegistry {
    cars: Vec<Car>,
    index: HashMap<CarId, usize>,
    registrations: HashSet<String>,
}

impl FleetRegistry {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        FleetRegistry::default()
    }

    /// Validates and loads fleet entries.
    ///
    /// ## Errors
    /// The first invalid entry or duplicate id/registration number aborts the
    /// load.
    pub fn load(entries: impl IntoIterator<Item = NewCar>) -> ValidationResult<Self> {
        let mut fleet = FleetRegistry::new();
        for entry in entries {
            fleet.add_car(validate_new_car(entry)?)?;
        }
        Ok(fleet)
    }

    /// Adds a car at load time. Every car enters the fleet available.
    ///
    /// ## Errors
    /// `Duplicate` if the car id or the registration number is taken.
    pub fn add_car(&mut self, mut car: Car) -> ValidationResult<()> {
        if self.index.contains_key(&car.id) {
            return Err(ValidationError::Duplicate {
                field: "car id".to_string(),
                value: car.id.to_string(),
            });
        }
        if self.registrations.contains(&car.registration_number) {
            return Err(ValidationError::Duplicate {
                field: "registration number".to_string(),
                value: car.registration_number,
            });
        }

        // No ledger entry can reference a car that is only now being loaded.
        car.mark_returned();

        self.registrations.insert(car.registration_number.clone());
        self.index.insert(car.id.clone(), self.cars.len());
        self.cars.push(car);
        Ok(())
    }

    /// Cars currently available, in fleet order.
    ///
    /// The iterator borrows the fleet, so it is a consistent snapshot, and
    /// it is `Clone`, so it can be walked again.
    pub fn list_available(&self) -> impl Iterator<Item = &Car> + Clone + '_ {
        self.cars.iter().filter(|car| car.is_available())
    }

    /// Exact-match lookup. `None` is an ordinary outcome.
    pub fn find_by_id(&self, id: &CarId) -> Option<&Car> {
        self.index.get(id).map(|&i| &self.cars[i])
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &CarId) -> Option<&mut Car> {
        match self.index.get(id) {
            Some(&i) => self.cars.get_mut(i),
            None => None,
        }
    }

    /// Whole fleet, in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Car> + '_ {
        self.cars.iter()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
