//! # Validation Module
//!
//! Input validation for operator-supplied fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Prompts, empty-field checks, immediate feedback                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields (trimmed, non-blank)                              │
//! │  ├── Money amounts (exact decimal parsing)                             │
//! │  └── Fleet load checks (ids, positive rates)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Booking engine                                               │
//! │  └── Availability, registration, date range                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator runs before any state changes, so a rejected input never
//! leaves a half-applied operation behind.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Car, CarId, NewCar, NewCustomer};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest free-text field accepted from the operator.
pub const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field and returns it trimmed.
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_required;
///
/// assert_eq!(validate_required("name", "  Asha ").unwrap(), "Asha");
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// Validates walk-in customer details and returns them trimmed.
///
/// ## Rules
/// - name, contact number and license number are all required
/// - surrounding whitespace is dropped
pub fn validate_new_customer(details: &NewCustomer) -> ValidationResult<NewCustomer> {
    Ok(NewCustomer {
        name: validate_required("name", &details.name)?,
        contact_number: validate_required("contact number", &details.contact_number)?,
        license_number: validate_required("license number", &details.license_number)?,
    })
}

/// Validates a car id typed by the operator.
///
/// Returns the trimmed id; a mistyped id with stray spaces still resolves.
pub fn validate_car_id(id: &str) -> ValidationResult<CarId> {
    validate_required("car id", id).map(CarId::new)
}

// =============================================================================
// Money Validators
// =============================================================================

/// Parses an exact decimal amount such as `"10.00"`.
pub fn parse_money(field: &str, input: &str) -> ValidationResult<Money> {
    Money::parse_decimal(input).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a decimal amount with at most two fraction digits".to_string(),
    })
}

/// Validates a daily insurance fee. Zero is allowed (insurance offered free).
pub fn validate_insurance_fee(fee: Money) -> ValidationResult<Money> {
    if fee.is_negative() {
        return Err(ValidationError::Negative {
            field: "insurance fee per day".to_string(),
        });
    }
    Ok(fee)
}

// =============================================================================
// Fleet Load Validators
// =============================================================================

/// Validates a fleet entry and builds the (available) [`Car`].
///
/// ## Rules
/// - car id, brand, model, registration number are required
/// - daily rate must be positive
/// - seating capacity must be positive
pub fn validate_new_car(new_car: NewCar) -> ValidationResult<Car> {
    if !new_car.price_per_day.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price per day".to_string(),
        });
    }

    if new_car.seating_capacity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "seating capacity".to_string(),
        });
    }

    let new_car = NewCar {
        car_id: validate_required("car id", &new_car.car_id)?,
        brand: validate_required("brand", &new_car.brand)?,
        model: validate_required("model", &new_car.model)?,
        registration_number: validate_required(
            "registration number",
            &new_car.registration_number,
        )?,
        vehicle_type: new_car.vehicle_type.trim().to_string(),
        color: new_car.color.trim().to_string(),
        ..new_car
    };

    Ok(Car::from_validated(new_car))
}

// =============================================================================
// Unit Tests
// =============================================================================
