//! Payment plan generation.
use log::debug;

use crate::domain::models::plan::{PaymentPlan, PlanDefinition, PLAN_DEFINITIONS};

/// Derives the fixed set of payment plans from a discounted quote cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanService;

impl PlanService {
    pub fn new() -> Self {
        Self
    }

    /// Expand a discounted cost into the ordered plan list.
    ///
    /// The output always contains one entry per definition, in table
    /// order, whatever the cost is. Amounts are whole currency units,
    /// rounded half away from zero.
    pub fn build_plans(&self, discounted_cost: i64) -> Vec<PaymentPlan> {
        PLAN_DEFINITIONS
            .iter()
            .map(|definition| Self::build_plan(definition, discounted_cost))
            .collect()
    }

    fn build_plan(definition: &PlanDefinition, discounted_cost: i64) -> PaymentPlan {
        let mut total = discounted_cost as f64 * (1.0 - definition.discount_percent as f64 / 100.0);
        total *= 1.0 + definition.surcharge_percent as f64 / 100.0;

        let amount = if definition.per_installment() {
            (total / f64::from(definition.installments)).round() as i64
        } else {
            total.round() as i64
        };

        debug!(
            "Plan: {}, amount: {}, discount: {}, per installment: {}",
            definition.name,
            amount,
            definition.discount_percent,
            definition.per_installment()
        );

        PaymentPlan {
            name: definition.name.to_string(),
            amount,
            discount_percent: definition.discount_percent,
            per_installment: definition.per_installment(),
        }
    }
}
