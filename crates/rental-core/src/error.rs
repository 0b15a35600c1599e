//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── RentalError      - Booking and lifecycle failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Presentation                                                          │
//! │  └── ErrorCode        - Machine-readable code for each RentalError     │
//! │                                                                         │
//! │  Flow: ValidationError → RentalError → ErrorCode + message → Operator  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable by the caller. Nothing in the core panics or
//! terminates the process on bad input.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::types::{CarId, CustomerId, RentalStatus};

// =============================================================================
// Rental Error
// =============================================================================

/// Booking engine errors.
///
/// These represent business rule violations. The facade returns them
/// unchanged; the presentation layer turns them into prompts.
#[derive(Debug, Error)]
pub enum RentalError {
    /// No car in the fleet has this identifier.
    ///
    /// ## When This Occurs
    /// - Operator typed a car id that does not exist
    /// - Renting or returning a car that was never loaded
    ///
    /// Distinct from "car is not currently rented", which is not an error.
    #[error("Car not found: {0}")]
    CarNotFound(CarId),

    /// The car exists but already has an active rental.
    ///
    /// ## User Workflow
    /// ```text
    /// Operator selects C003
    ///      │
    ///      ▼
    /// Booking engine: C003 already rented
    ///      │
    ///      ▼
    /// CarUnavailable("C003")
    ///      │
    ///      ▼
    /// UI shows: "Selected car is not available"
    /// ```
    #[error("Car {0} is not available")]
    CarUnavailable(CarId),

    /// Rental dates are malformed or reversed.
    #[error("Invalid date range: {reason}")]
    InvalidDateRange { reason: String },

    /// The customer was never registered.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// The rental is not in a state that allows the requested transition.
    #[error("Rental {rental_id} is {current_status}, cannot perform operation")]
    InvalidRentalStatus {
        rental_id: String,
        current_status: RentalStatus,
    },

    /// Booking precondition not otherwise classified.
    #[error("Booking failed: {reason}")]
    Booking { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl RentalError {
    /// Creates an InvalidDateRange error.
    pub fn invalid_dates(reason: impl Into<String>) -> Self {
        RentalError::InvalidDateRange {
            reason: reason.into(),
        }
    }

    /// Creates a catch-all Booking error.
    pub fn booking(reason: impl Into<String>) -> Self {
        RentalError::Booking {
            reason: reason.into(),
        }
    }

    /// Machine-readable code for presentation.
    pub fn code(&self) -> ErrorCode {
        match self {
            RentalError::CarNotFound(_) | RentalError::CustomerNotFound(_) => ErrorCode::NotFound,
            RentalError::CarUnavailable(_) => ErrorCode::CarUnavailable,
            RentalError::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            RentalError::InvalidRentalStatus { .. } | RentalError::Booking { .. } => {
                ErrorCode::BookingError
            }
            RentalError::Validation(_) => ErrorCode::ValidationError,
        }
    }
}

/// Error codes for presentation.
///
/// ## Serialization
/// ```json
/// { "code": "CAR_UNAVAILABLE", "message": "Car C003 is not available" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Car or customer does not exist
    NotFound,
    /// Input validation failed
    ValidationError,
    /// Car already has an active rental
    CarUnavailable,
    /// Dates malformed or reversed
    InvalidDateRange,
    /// Any other booking precondition
    BookingError,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before the booking engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., malformed amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two cars with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type CoreResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================
