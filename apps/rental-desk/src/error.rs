//! # Desk Error Type
//!
//! Everything a command can fail with, rendered on one line for the
//! operator.
//!
//! ```text
//! rental> rent C003 2024-01-01 2024-01-03 no | Ben | 555-0102 | DL-2
//! error: [CarUnavailable] Car C003 is not available
//!         ▲                ▲
//!         │                └── RentalError message
//!         └── ErrorCode
//! ```

use rental_core::{ErrorCode, RentalError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    /// The booking engine refused the request.
    #[error("[{:?}] {}", .0.code(), .0)]
    Rental(#[from] RentalError),

    /// The command line could not be understood.
    #[error("{0}")]
    Usage(String),

    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    pub fn usage(message: impl Into<String>) -> Self {
        DeskError::Usage(message.into())
    }

    /// Engine error code, if the engine produced this error.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DeskError::Rental(err) => Some(err.code()),
            _ => None,
        }
    }
}

/// Fleet loading fails with a bare validation error.
impl From<ValidationError> for DeskError {
    fn from(err: ValidationError) -> Self {
        DeskError::Rental(RentalError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::CarId;

    #[test]
    fn test_rental_error_shows_code_and_message() {
        let err = DeskError::from(RentalError::CarUnavailable(CarId::new("C003")));
        assert_eq!(err.to_string(), "[CarUnavailable] Car C003 is not available");
        assert_eq!(err.code(), Some(ErrorCode::CarUnavailable));
    }

    #[test]
    fn test_usage_error_has_no_code() {
        let err = DeskError::usage("usage: return <car-id>");
        assert_eq!(err.to_string(), "usage: return <car-id>");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_validation_error_maps_to_validation_code() {
        let err = DeskError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code(), Some(ErrorCode::ValidationError));
    }
}
