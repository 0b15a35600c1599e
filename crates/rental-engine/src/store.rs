//! # Rental Store
//!
//! The three collections the desk mutates, constructed once at startup and
//! handed to the facade.
//!
//! ```text
//! ┌──────────────────────────── RentalStore ────────────────────────────┐
//! │  FleetRegistry        CustomerRegistry          RentalLedger        │
//! │  Vec<Car>             Vec<Customer>             Vec<Rental>         │
//! │     ▲                      ▲                        │               │
//! │     └──── car_id ──────────┴──── customer_id ───────┘               │
//! │               (referenced by id, never owned)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use rental_core::CarId;

use crate::customers::CustomerRegistry;
use crate::fleet::FleetRegistry;
use crate::ledger::RentalLedger;

#[derive(Debug, Clone, Default)]
pub struct RentalStore {
    pub(crate) fleet: FleetRegistry,
    pub(crate) customers: CustomerRegistry,
    pub(crate) ledger: RentalLedger,
}

impl RentalStore {
    /// A fresh store: loaded fleet, nobody registered, nothing rented.
    pub fn new(fleet: FleetRegistry, customers: CustomerRegistry) -> Self {
        RentalStore {
            fleet,
            customers,
            ledger: RentalLedger::new(),
        }
    }

    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    pub fn ledger(&self) -> &RentalLedger {
        &self.ledger
    }

    /// Cars whose `available` flag disagrees with the ledger. Always empty
    /// unless something bypassed the booking engine.
    pub fn availability_mismatches(&self) -> Vec<CarId> {
        self.fleet
            .iter()
            .filter(|car| car.is_available() == self.ledger.active_rental_for(&car.id).is_some())
            .map(|car| car.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_fleet;

    #[test]
    fn test_new_store_is_consistent() {
        let store = RentalStore::new(demo_fleet().unwrap(), CustomerRegistry::default());
        assert!(store.availability_mismatches().is_empty());
        assert!(store.ledger().is_empty());
        assert!(store.customers().is_empty());
    }

    #[test]
    fn test_detects_flag_flipped_behind_the_ledger() {
        let mut store = RentalStore::new(demo_fleet().unwrap(), CustomerRegistry::default());
        let id = CarId::new("C004");
        store.fleet.find_by_id_mut(&id).unwrap().mark_rented();
        assert_eq!(store.availability_mismatches(), vec![id]);
    }
}
