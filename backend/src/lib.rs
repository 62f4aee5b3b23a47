//! # Cotizador Backend
//!
//! Domain services and storage for the rental-guarantee quote engine:
//! pricing with duration multipliers, finite-use discount coupons with a
//! durable JSON inventory, the fixed payment-plan table, and quote
//! notification over SMTP under a hard delivery deadline.
//!
//! The web layer stays outside this crate. Everything here takes plain
//! records and returns typed results, so it can sit behind any
//! transport.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use domain::{
    CouponService, DeliveryOutcome, DispatchError, MailTransport, MailerConfig,
    MailerConfigService, MailerService, PlanService, PricingService, RedemptionResult, SmtpMailer,
};
pub use domain::models::coupon::Coupon;
pub use domain::models::plan::PaymentPlan;
pub use domain::models::quote::Quote;
pub use storage::{CouponStorage, JsonConnection, JsonCouponRepository};

use shared::{EmailForm, QuoteForm};

/// Main backend struct that wires all services together
pub struct Backend {
    pub pricing_service: PricingService<JsonCouponRepository>,
    pub plan_service: PlanService,
    pub coupon_service: Arc<CouponService<JsonCouponRepository>>,
    pub mailer_service: MailerService,
}

impl Backend {
    /// Create a backend storing the coupon inventory in the process
    /// working directory.
    pub fn new() -> Result<Self> {
        Self::with_connection(JsonConnection::new_default()?)
    }

    /// Create a backend storing the coupon inventory under the given
    /// data directory.
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Self::with_connection(JsonConnection::new(data_dir)?)
    }

    fn with_connection(connection: JsonConnection) -> Result<Self> {
        let coupon_service = Arc::new(CouponService::new(JsonCouponRepository::new(connection))?);
        let pricing_service = PricingService::new(Arc::clone(&coupon_service));

        Ok(Self {
            pricing_service,
            plan_service: PlanService::new(),
            coupon_service,
            mailer_service: MailerService::new(Arc::new(SmtpMailer)),
        })
    }

    /// Price a raw quote form.
    pub fn quote(&self, form: &QuoteForm) -> Quote {
        self.pricing_service.compute_cost(
            form.duration_months(),
            form.monthly_rent(),
            form.monthly_fees(),
            form.coupon(),
        )
    }

    /// Expand a discounted cost into the ordered payment-plan list.
    pub fn plans(&self, discounted_cost: i64) -> Vec<PaymentPlan> {
        self.plan_service.build_plans(discounted_cost)
    }

    /// Dispatch the finalized quote by email, reading the transport
    /// settings from the environment on every call.
    pub async fn send_quote_email(
        &self,
        form: &EmailForm,
    ) -> std::result::Result<DeliveryOutcome, DispatchError> {
        let config = MailerConfigService::from_env();
        self.mailer_service.send_quote_email(&config, form).await
    }
}
