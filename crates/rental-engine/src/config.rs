//! # Desk Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RENTAL_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use rental_core::validation::{
    parse_money, validate_insurance_fee, validate_required, ValidationResult,
};
use rental_core::{Money, CUSTOMER_ID_PREFIX, DEFAULT_INSURANCE_FEE_PER_DAY};

/// Overrides the daily insurance fee, e.g. `12.50`.
pub const ENV_INSURANCE_FEE: &str = "RENTAL_INSURANCE_FEE";
/// Overrides the currency symbol used for display.
pub const ENV_CURRENCY_SYMBOL: &str = "RENTAL_CURRENCY_SYMBOL";
/// Overrides the customer id prefix.
pub const ENV_CUSTOMER_PREFIX: &str = "RENTAL_CUSTOMER_PREFIX";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalConfig {
    /// Charged per billable day on insured rentals.
    pub insurance_fee_per_day: Money,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Prefix of customer ids (`CUS` → `CUS1`, `CUS2`, ...)
    pub customer_id_prefix: String,
}

impl Default for RentalConfig {
    /// - Insurance: $10.00 per day
    /// - Currency: `$`
    /// - Customer ids: `CUS<n>`
    fn default() -> Self {
        RentalConfig {
            insurance_fee_per_day: DEFAULT_INSURANCE_FEE_PER_DAY,
            currency_symbol: "$".to_string(),
            customer_id_prefix: CUSTOMER_ID_PREFIX.to_string(),
        }
    }
}

impl RentalConfig {
    /// Defaults with a different insurance fee.
    ///
    /// ## Errors
    /// `Negative` if the fee is below zero.
    pub fn with_insurance_fee(fee: Money) -> ValidationResult<Self> {
        Ok(RentalConfig {
            insurance_fee_per_day: validate_insurance_fee(fee)?,
            ..RentalConfig::default()
        })
    }

    /// Creates a RentalConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RENTAL_INSURANCE_FEE`: daily insurance fee (e.g. "12.50")
    /// - `RENTAL_CURRENCY_SYMBOL`: display symbol (e.g. "€")
    /// - `RENTAL_CUSTOMER_PREFIX`: customer id prefix
    pub fn from_env() -> Self {
        RentalConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Values that fail validation are
    /// logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = RentalConfig::default();

        if let Some(raw) = lookup(ENV_INSURANCE_FEE) {
            match parse_money("insurance fee per day", &raw).and_then(validate_insurance_fee) {
                Ok(fee) => config.insurance_fee_per_day = fee,
                Err(err) => {
                    warn!(key = ENV_INSURANCE_FEE, value = %raw, %err, "Ignoring invalid setting")
                }
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY_SYMBOL) {
            match validate_required("currency symbol", &raw) {
                Ok(symbol) => config.currency_symbol = symbol,
                Err(err) => warn!(key = ENV_CURRENCY_SYMBOL, %err, "Ignoring invalid setting"),
            }
        }

        if let Some(raw) = lookup(ENV_CUSTOMER_PREFIX) {
            match validate_required("customer id prefix", &raw) {
                Ok(prefix) => config.customer_id_prefix = prefix,
                Err(err) => warn!(key = ENV_CUSTOMER_PREFIX, %err, "Ignoring invalid setting"),
            }
        }

        config
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::Money;
    /// use rental_engine::RentalConfig;
    ///
    /// let config = RentalConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(24000)), "$240.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RentalConfig::default();
        assert_eq!(config.insurance_fee_per_day.cents(), 1000);
        assert_eq!(config.customer_id_prefix, "CUS");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = RentalConfig::from_lookup(lookup(&[
            (ENV_INSURANCE_FEE, "12.50"),
            (ENV_CURRENCY_SYMBOL, "€"),
            (ENV_CUSTOMER_PREFIX, "WALK"),
        ]));
        assert_eq!(config.insurance_fee_per_day.cents(), 1250);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.customer_id_prefix, "WALK");
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = RentalConfig::from_lookup(lookup(&[
            (ENV_INSURANCE_FEE, "-3"),
            (ENV_CURRENCY_SYMBOL, "  "),
        ]));
        assert_eq!(config.insurance_fee_per_day, DEFAULT_INSURANCE_FEE_PER_DAY);
        assert_eq!(config.currency_symbol, "$");

        let config = RentalConfig::from_lookup(lookup(&[(ENV_INSURANCE_FEE, "ten")]));
        assert_eq!(config.insurance_fee_per_day, DEFAULT_INSURANCE_FEE_PER_DAY);
    }

    #[test]
    fn test_with_insurance_fee() {
        let config = RentalConfig::with_insurance_fee(Money::zero()).unwrap();
        assert!(config.insurance_fee_per_day.is_zero());
        assert!(RentalConfig::with_insurance_fee(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = RentalConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(5000)), "$50.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }
}
