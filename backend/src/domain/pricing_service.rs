//! Pricing engine for guarantee quotes.
use log::info;
use std::sync::Arc;

use crate::domain::coupon_service::{CouponService, RedemptionResult};
use crate::domain::models::quote::Quote;
use crate::storage::traits::CouponStorage;

/// Multiplier applied to the monthly total for each supported duration
const DURATION_MULTIPLIERS: [(u32, f64); 3] = [(12, 0.8), (24, 1.5), (36, 1.75)];

/// Multiplier used when the requested duration is not a supported value
const DEFAULT_MULTIPLIER: f64 = 0.8;

/// Service computing quote costs from the request inputs and the coupon
/// inventory.
pub struct PricingService<S: CouponStorage> {
    coupon_service: Arc<CouponService<S>>,
}

impl<S: CouponStorage> PricingService<S> {
    pub fn new(coupon_service: Arc<CouponService<S>>) -> Self {
        Self { coupon_service }
    }

    fn duration_multiplier(duration_months: u32) -> f64 {
        DURATION_MULTIPLIERS
            .iter()
            .find(|(months, _)| *months == duration_months)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// Price a guarantee request.
    ///
    /// Monetary results are whole currency units, rounded half away from
    /// zero (`f64::round`). The original cost is rounded before the coupon
    /// percentage is applied, and the discounted cost is rounded again;
    /// both stages must stay separate, since collapsing them into one
    /// formula changes the unit-level output.
    ///
    /// A non-empty coupon code triggers exactly one redemption attempt.
    /// An unknown or exhausted code is not an error: the quote proceeds
    /// undiscounted with a message saying so.
    pub fn compute_cost(
        &self,
        duration_months: u32,
        monthly_rent: f64,
        monthly_fees: f64,
        coupon_code: &str,
    ) -> Quote {
        let multiplier = Self::duration_multiplier(duration_months);
        let original_cost = ((monthly_rent + monthly_fees) * multiplier).round() as i64;

        let mut discount_percent = 0u8;
        let mut discount_message = None;

        if !coupon_code.is_empty() {
            match self.coupon_service.redeem(coupon_code) {
                RedemptionResult::Applied { percent } => {
                    discount_percent = percent;
                    discount_message = Some(format!(
                        "Cupón aplicado: {} ({}% descuento)",
                        coupon_code, percent
                    ));
                }
                RedemptionResult::NotApplicable => {
                    discount_message = Some("Cupón inválido o agotado".to_string());
                }
            }
        }

        let discounted_cost = if discount_percent > 0 {
            (original_cost as f64 * (1.0 - f64::from(discount_percent) / 100.0)).round() as i64
        } else {
            original_cost
        };

        info!(
            "Quoted {} months: original {}, discounted {} ({}% off)",
            duration_months, original_cost, discounted_cost, discount_percent
        );

        Quote {
            original_cost,
            discounted_cost,
            discount_percent,
            discount_applied: discount_percent > 0,
            discount_message,
        }
    }
}
