//! Domain services for the quote engine.

pub mod coupon_service;
pub mod mailer_config_service;
pub mod mailer_service;
pub mod models;
pub mod plan_service;
pub mod pricing_service;

pub use coupon_service::{CouponService, RedemptionResult};
pub use mailer_config_service::{MailerConfig, MailerConfigService};
pub use mailer_service::{
    DeliveryOutcome, DispatchError, MailTransport, MailerService, SmtpMailer,
};
pub use plan_service::PlanService;
pub use pricing_service::PricingService;
