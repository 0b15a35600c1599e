//! # rental-engine: Booking Engine for the Rental Desk
//!
//! Holds the fleet, the customers and the rental ledger in memory and
//! exposes them through one facade, [`RentalSystem`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental Desk Data Flow                            │
//! │                                                                         │
//! │  Presentation (rent_car, return_car, ...)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   rental-engine (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────────────────┐    │   │
//! │  │   │ RentalSystem  │───►│ RentalStore (behind a Mutex)     │    │   │
//! │  │   │ (system.rs)   │    │  ├── FleetRegistry    (fleet.rs) │    │   │
//! │  │   │               │    │  ├── CustomerRegistry            │    │   │
//! │  │   │ RentalConfig  │    │  └── RentalLedger    (ledger.rs) │    │   │
//! │  │   └───────────────┘    └──────────────────────────────────┘    │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rental-core (pricing, validation, entities)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rental_engine::{seed, RentalConfig, RentalSystem};
//!
//! let desk = RentalSystem::new(seed::demo_fleet().unwrap(), RentalConfig::default());
//!
//! let customer = desk.register_customer("Asha Rao", "555-0101", "DL-7781").unwrap();
//! let rental = desk
//!     .rent_car("C001", &customer.id, "2024-01-01", "2024-01-05", true)
//!     .unwrap();
//! assert_eq!(rental.total_price().cents(), 4 * 5000 + 4 * 1000);
//!
//! assert!(desk.return_car("C001").unwrap().is_returned());
//! ```

pub mod config;
pub mod customers;
pub mod fleet;
pub mod ledger;
pub mod seed;
pub mod store;
pub mod system;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::RentalConfig;
pub use customers::CustomerRegistry;
pub use fleet::FleetRegistry;
pub use ledger::{RentRequest, RentalLedger, ReturnOutcome};
pub use store::RentalStore;
pub use system::{RentalSystem, WalkInBooking};
