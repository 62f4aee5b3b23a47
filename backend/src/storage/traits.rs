//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows
//! different coupon store backends to be used interchangeably in the
//! domain layer.

use anyhow::Result;
use std::collections::HashMap;

use crate::domain::models::coupon::Coupon;

/// Trait defining the interface for coupon inventory storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the redemption logic to work with different durable media
/// (JSON files, databases, etc.) without modification.
pub trait CouponStorage: Send + Sync {
    /// Restore the full coupon mapping from the durable medium.
    ///
    /// A missing or unreadable medium falls back to the hard-coded
    /// default set, which is persisted immediately so subsequent
    /// restarts see consistent state.
    fn load_or_seed(&self) -> Result<HashMap<String, Coupon>>;

    /// Flush the full coupon mapping to the durable medium.
    fn save_all(&self, coupons: &HashMap<String, Coupon>) -> Result<()>;
}
