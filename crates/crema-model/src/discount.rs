//! Discount codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    /// The code as entered.
    pub code: String,
    /// Percentage taken off the order total, 0..=100.
    pub percent_off: u8,
    /// Expiry, absent for codes without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl DiscountCode {
    /// Whether the code has expired at the given instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Applies the discount to an amount in minor units.
    ///
    /// The discounted total is rounded down, so the customer never pays a
    /// fraction of a cent more than advertised.
    #[must_use]
    pub fn apply_to(&self, amount_cents: i64) -> i64 {
        let percent = i64::from(self.percent_off.min(100));
        amount_cents * (100 - percent) / 100
    }
}
