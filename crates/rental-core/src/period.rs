//! # Rental Period
//!
//! Calendar date range of a booking, parsed from operator input.
//!
//! ## Billable Days
//! ```text
//! start 2024-01-01, end 2024-01-05  →  4 days between  →  4 billable
//! start 2024-01-01, end 2024-01-01  →  0 days between  →  1 billable (floor)
//! start 2024-01-05, end 2024-01-01  →  InvalidDateRange
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, RentalError};

/// ISO-8601 calendar date format accepted from the operator.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum number of days charged for any rental.
pub const MIN_BILLABLE_DAYS: i64 = 1;

/// A validated date range with `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    /// Builds a period from already-parsed dates.
    ///
    /// ## Errors
    /// `InvalidDateRange` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if end < start {
            return Err(RentalError::invalid_dates(format!(
                "return date {} is before start date {}",
                end, start
            )));
        }
        Ok(RentalPeriod { start, end })
    }

    /// Parses `YYYY-MM-DD` start and end strings.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::period::RentalPeriod;
    ///
    /// let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
    /// assert_eq!(period.billable_days(), 4);
    ///
    /// assert!(RentalPeriod::parse("2024-13-01", "2024-01-05").is_err());
    /// ```
    ///
    /// ## Errors
    /// `InvalidDateRange` for blank or malformed strings and for reversed
    /// ranges.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        let start = parse_date("start date", start)?;
        let end = parse_date("return date", end)?;
        RentalPeriod::new(start, end)
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole calendar days between start and end, before the floor.
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Days charged: calendar days, floored to one for same-day rentals.
    pub fn billable_days(&self) -> i64 {
        self.calendar_days().max(MIN_BILLABLE_DAYS)
    }
}

/// Parses one ISO-8601 calendar date.
fn parse_date(field: &str, input: &str) -> CoreResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(RentalError::invalid_dates(format!("{} is required", field)));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        RentalError::invalid_dates(format!(
            "{} '{}' is not a valid YYYY-MM-DD date",
            field, input
        ))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
