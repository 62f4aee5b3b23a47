//! Coupon redemption service.
//!
//! The coupon inventory is the only shared mutable state in the quote
//! flow, so every redemption runs a single critical section covering the
//! availability check, the decrement and the write-through persist.

use anyhow::Result;
use log::{error, info};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::models::coupon::Coupon;
use crate::storage::traits::CouponStorage;

/// Outcome of a redemption attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionResult {
    /// The coupon existed with uses left; exactly one use was consumed
    Applied { percent: u8 },
    /// Unknown or exhausted code; the quote proceeds without a discount
    NotApplicable,
}

/// Service owning the in-memory coupon inventory and its persistence.
pub struct CouponService<S: CouponStorage> {
    repository: S,
    coupons: Mutex<HashMap<String, Coupon>>,
}

impl<S: CouponStorage> CouponService<S> {
    /// Restore the inventory from storage (seeding defaults when needed).
    pub fn new(repository: S) -> Result<Self> {
        let coupons = repository.load_or_seed()?;
        info!("Coupon inventory ready with {} codes", coupons.len());
        Ok(Self {
            repository,
            coupons: Mutex::new(coupons),
        })
    }

    /// Redeem a coupon code, consuming one use.
    ///
    /// The inventory is persisted before the lock is released, so two
    /// concurrent redemptions of the same code can never both observe the
    /// last remaining use. A persistence failure is logged and the
    /// redemption still succeeds; the in-memory decrement stands and the
    /// on-disk count catches up on the next successful save.
    pub fn redeem(&self, code: &str) -> RedemptionResult {
        let mut coupons = self.coupons.lock().unwrap();

        let percent = match coupons.get_mut(code) {
            Some(coupon) if coupon.remaining > 0 => {
                coupon.remaining -= 1;
                info!("Coupon {} redeemed, {} uses left", code, coupon.remaining);
                coupon.percent
            }
            _ => return RedemptionResult::NotApplicable,
        };

        if let Err(e) = self.repository.save_all(&coupons) {
            error!(
                "Failed to persist coupon inventory after redeeming {}: {}",
                code, e
            );
        }

        RedemptionResult::Applied { percent }
    }

    /// Remaining use count for a code, if the code is known.
    pub fn remaining(&self, code: &str) -> Option<u32> {
        self.coupons.lock().unwrap().get(code).map(|c| c.remaining)
    }
}
