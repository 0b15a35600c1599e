//! # Pricing
//!
//! Computes what a rental costs.
//!
//! ```text
//! total = price_per_day × billable_days
//!       + insurance_fee_per_day × billable_days   (only when insured)
//! ```
//!
//! The insurance fee is desk configuration, not a property of the car.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, RentalError};
use crate::money::Money;
use crate::period::RentalPeriod;

/// Price breakdown for one rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Days charged (at least one).
    pub billable_days: i64,
    /// Car daily rate at quote time.
    pub price_per_day: Money,
    /// Insurance daily fee at quote time (charged only if `insured`).
    pub insurance_fee_per_day: Money,
    pub insured: bool,
    /// `price_per_day × billable_days`
    pub base_price: Money,
    /// `insurance_fee_per_day × billable_days`, or zero.
    pub insurance_price: Money,
    /// The amount charged.
    pub total: Money,
}

impl PriceQuote {
    /// Computes the quote for a period.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    /// use rental_core::period::RentalPeriod;
    /// use rental_core::pricing::PriceQuote;
    ///
    /// let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
    /// let quote = PriceQuote::compute(
    ///     Money::from_major_minor(50, 0),
    ///     Money::from_major_minor(10, 0),
    ///     &period,
    ///     true,
    /// )
    /// .unwrap();
    ///
    /// // 4 × $50 + 4 × $10
    /// assert_eq!(quote.total.cents(), 24000);
    /// ```
    ///
    /// ## Errors
    /// `Booking` if the total does not fit the money range.
    pub fn compute(
        price_per_day: Money,
        insurance_fee_per_day: Money,
        period: &RentalPeriod,
        insured: bool,
    ) -> CoreResult<Self> {
        let days = period.billable_days();

        let base_price = price_per_day
            .checked_multiply_days(days)
            .ok_or_else(|| RentalError::booking("rental price exceeds the supported range"))?;

        let insurance_price = if insured {
            insurance_fee_per_day
                .checked_multiply_days(days)
                .ok_or_else(|| RentalError::booking("insurance price exceeds the supported range"))?
        } else {
            Money::zero()
        };

        let total = base_price
            .checked_add(insurance_price)
            .ok_or_else(|| RentalError::booking("rental total exceeds the supported range"))?;

        Ok(PriceQuote {
            billable_days: days,
            price_per_day,
            insurance_fee_per_day,
            insured,
            base_price,
            insurance_price,
            total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fifty() -> Money {
        Money::from_major_minor(50, 0)
    }

    fn ten() -> Money {
        Money::from_major_minor(10, 0)
    }

    #[test]
    fn test_same_day_charges_one_day() {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-01").unwrap();
        let quote = PriceQuote::compute(fifty(), ten(), &period, false).unwrap();
        assert_eq!(quote.billable_days, 1);
        assert_eq!(quote.total, fifty());
    }

    #[test]
    fn test_insured_four_days() {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        let quote = PriceQuote::compute(fifty(), ten(), &period, true).unwrap();
        assert_eq!(quote.base_price.cents(), 20000);
        assert_eq!(quote.insurance_price.cents(), 4000);
        assert_eq!(quote.total.cents(), 24000);
    }

    #[test]
    fn test_uninsured_ignores_fee() {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        let quote = PriceQuote::compute(fifty(), ten(), &period, false).unwrap();
        assert!(quote.insurance_price.is_zero());
        assert_eq!(quote.total.cents(), 20000);
    }

    #[test]
    fn test_overflow_is_booking_error() {
        let period = RentalPeriod::parse("2024-01-01", "2024-01-05").unwrap();
        let err = PriceQuote::compute(Money::from_cents(i64::MAX), ten(), &period, false)
            .unwrap_err();
        assert!(matches!(err, RentalError::Booking { .. }));
    }
}
