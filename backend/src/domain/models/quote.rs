//! Domain model for a priced guarantee quote.
use serde::{Deserialize, Serialize};

/// Result of pricing a guarantee request.
///
/// A quote is computed fresh per request and never stored server-side;
/// the caller carries its fields forward to the plan and email steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Cost before any discount, in whole currency units
    pub original_cost: i64,
    /// Cost after the coupon discount, equal to `original_cost` when no
    /// discount applied
    pub discounted_cost: i64,
    /// Discount percentage that was applied (0 when none)
    pub discount_percent: u8,
    /// Whether a coupon discount took effect
    pub discount_applied: bool,
    /// User-facing discount narrative; `None` when no coupon was entered
    pub discount_message: Option<String>,
}
