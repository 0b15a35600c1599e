//! # rental-core: Pure Business Logic for the Rental Desk
//!
//! This crate holds the rental rules as pure functions and plain data with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rental Desk Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (desk console / UI)             │   │
//! │  │     Car table ──► Rent prompts ──► Confirm ──► Return prompt    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          rental-engine (RentalSystem facade + ledger)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ Car       │  │   Money   │  │ PriceQuote│  │   rules   │  │   │
//! │  │   │ Rental    │  │           │  │  period   │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SYSTEM CLOCK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Car, Customer, Rental and their identifiers
//! - [`money`] - Money type with integer arithmetic
//! - [`period`] - Rental date ranges and billable days
//! - [`pricing`] - Rental price computation
//! - [`validation`] - Input validation
//! - [`clock`] - Injected time source
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Money, PriceQuote, RentalPeriod};
//!
//! let period = RentalPeriod::parse("2024-01-01", "2024-01-01").unwrap();
//! let quote = PriceQuote::compute(
//!     Money::from_major_minor(50, 0),
//!     rental_core::DEFAULT_INSURANCE_FEE_PER_DAY,
//!     &period,
//!     false,
//! )
//! .unwrap();
//!
//! // Same-day rentals are billed as one day
//! assert_eq!(quote.total.cents(), 5000);
//! ```

pub mod clock;
pub mod error;
pub mod money;
pub mod period;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreResult, ErrorCode, RentalError, ValidationError};
pub use money::Money;
pub use period::RentalPeriod;
pub use pricing::PriceQuote;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of sequential customer ids (`CUS1`, `CUS2`, ...).
pub const CUSTOMER_ID_PREFIX: &str = "CUS";

/// Insurance charged per billable day unless the desk is configured
/// otherwise.
pub const DEFAULT_INSURANCE_FEE_PER_DAY: Money = Money::from_cents(1000);
