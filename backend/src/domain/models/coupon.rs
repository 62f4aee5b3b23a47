//! Domain model for a discount coupon.
use serde::{Deserialize, Serialize};

/// A named, finite-use discount token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon code (case-sensitive)
    pub code: String,
    /// Discount percentage applied to the quoted cost (0-100)
    pub percent: u8,
    /// Redemptions left; the coupon is redeemable while this is above zero
    pub remaining: u32,
}

impl Coupon {
    pub fn new(code: &str, percent: u8, remaining: u32) -> Self {
        Self {
            code: code.to_string(),
            percent,
            remaining,
        }
    }

    /// The coupon inventory seeded on first run, or whenever the persisted
    /// store is missing or unreadable.
    pub fn default_set() -> Vec<Coupon> {
        vec![
            Coupon::new("RAICES10PLUS", 10, 100_000),
            Coupon::new("ALQUILA20YA", 20, 100_000),
            Coupon::new("MIHOGAR30", 30, 100_000),
        ]
    }
}
