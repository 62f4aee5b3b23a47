//! Payment plan model and the fixed plan definition table.
use serde::{Deserialize, Serialize};

/// Definition of one payment plan: its display name, the additional
/// discount or surcharge it carries, and how many installments it is
/// split into.
#[derive(Debug, Clone, Copy)]
pub struct PlanDefinition {
    pub name: &'static str,
    /// Additional discount on the quoted cost, in percent
    pub discount_percent: i64,
    /// Surcharge on the quoted cost, in percent
    pub surcharge_percent: i64,
    /// Number of installments the total is divided into
    pub installments: u32,
}

impl PlanDefinition {
    /// Whether the plan amount is shown per installment rather than as a
    /// lump sum.
    pub fn per_installment(&self) -> bool {
        self.installments > 1
    }
}

/// The fixed, ordered plan table. The order is a presentation contract:
/// downstream selection identifies a plan by its position and its
/// name/amount pairing.
pub const PLAN_DEFINITIONS: [PlanDefinition; 5] = [
    PlanDefinition {
        name: "Pago único",
        discount_percent: 0,
        surcharge_percent: 0,
        installments: 1,
    },
    PlanDefinition {
        name: "Transferencia",
        discount_percent: 15,
        surcharge_percent: 0,
        installments: 1,
    },
    PlanDefinition {
        name: "3 cuotas",
        discount_percent: 0,
        surcharge_percent: 0,
        installments: 3,
    },
    PlanDefinition {
        name: "6 cuotas",
        discount_percent: 0,
        surcharge_percent: 0,
        installments: 6,
    },
    PlanDefinition {
        name: "12 cuotas",
        discount_percent: 0,
        surcharge_percent: 10,
        installments: 12,
    },
];

/// A payment plan derived from a discounted quote cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    /// Display name of the plan
    pub name: String,
    /// Installment amount for subdivided plans, lump amount otherwise
    pub amount: i64,
    /// Additional discount the plan carries, in percent
    pub discount_percent: i64,
    /// Whether `amount` is per installment
    pub per_installment: bool,
}
