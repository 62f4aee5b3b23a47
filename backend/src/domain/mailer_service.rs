//! Quote notification dispatch over SMTP.
//!
//! The network send is the only operation in the quote flow that can
//! block for a long time, so it runs under a hard wall-clock deadline:
//! the blocking SMTP call is raced against a timer, and whichever
//! finishes first decides the outcome. An attempt that outlives the
//! deadline is abandoned, not cancelled; the transport does not expose
//! cancellation.

use anyhow::{Context, Result};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use shared::EmailForm;

use super::mailer_config_service::MailerConfig;

/// Wall-clock budget for one delivery attempt
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Display name used in the From header
const FROM_DISPLAY_NAME: &str = "Mi App Cotizaciones";

/// Terminal failure of a dispatch attempt.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A malformed address or missing transport setting. Reported before
    /// any network I/O, naming the offending field.
    #[error("{message}")]
    Validation { field: &'static str, message: String },
    /// The SMTP transport failed or rejected the send
    #[error("Error enviando email: {0}")]
    Transport(String),
    /// The deadline elapsed before the transport finished
    #[error("Timeout enviando email")]
    Timeout,
}

/// Successful dispatch outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The transport accepted the message within the deadline
    Sent,
    /// Every form field was blank; recognized as a duplicate submission
    /// and skipped without touching the network
    SkippedEmpty,
}

/// Seam between the dispatcher and the SMTP client, so delivery can be
/// simulated in tests.
pub trait MailTransport: Send + Sync {
    /// Deliver a fully built message using the given transport settings.
    /// Blocking.
    fn deliver(&self, config: &MailerConfig, message: &Message) -> Result<()>;
}

/// Production transport: SMTP relay with required TLS and credentials.
/// Built per call, so settings corrected between attempts take effect
/// immediately.
pub struct SmtpMailer;

impl MailTransport for SmtpMailer {
    fn deliver(&self, config: &MailerConfig, message: &Message) -> Result<()> {
        let tls_params = TlsParameters::new(config.smtp_server.clone())
            .context("Failed to create TLS parameters")?;

        let transport = SmtpTransport::relay(&config.smtp_server)
            .context("Failed to create SMTP relay")?
            .port(config.smtp_port)
            .tls(Tls::Required(tls_params))
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        transport.send(message).context("Failed to send email")?;
        Ok(())
    }
}

pub struct MailerService {
    transport: Arc<dyn MailTransport>,
    send_timeout: Duration,
}

impl MailerService {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self {
            transport,
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    /// Override the delivery deadline (mainly for tests).
    pub fn with_timeout(transport: Arc<dyn MailTransport>, send_timeout: Duration) -> Self {
        Self {
            transport,
            send_timeout,
        }
    }

    /// Send the finalized quote to the prospect and the admin recipient.
    ///
    /// Validation failures are reported without any network I/O. The
    /// send itself runs under the configured deadline; when the deadline
    /// elapses first, `Timeout` is returned immediately while the
    /// in-flight attempt finishes in the background.
    pub async fn send_quote_email(
        &self,
        config: &MailerConfig,
        form: &EmailForm,
    ) -> Result<DeliveryOutcome, DispatchError> {
        if form.is_empty() {
            info!("Empty form submission detected, skipping");
            return Ok(DeliveryOutcome::SkippedEmpty);
        }

        let cost = form.cost();
        let plan = form.plan();
        info!(
            "📧 Processing quote email: to={}, cost={}, plan={}",
            form.email(),
            cost,
            plan
        );

        let from = parse_addr("EMAIL_FROM", &config.from_email).map_err(|reason| {
            DispatchError::Validation {
                field: "EMAIL_FROM",
                message: format!("Configurá EMAIL_FROM con un mail válido de Gmail. {}", reason),
            }
        })?;
        if config.username.is_empty() {
            return Err(DispatchError::Validation {
                field: "EMAIL_USER",
                message: "Configurá EMAIL_USER con el usuario de Gmail.".to_string(),
            });
        }
        if config.password.is_empty() {
            return Err(DispatchError::Validation {
                field: "EMAIL_PASS",
                message: "Configurá EMAIL_PASS con la contraseña de aplicación de Gmail."
                    .to_string(),
            });
        }
        let admin = parse_addr("EMAIL_ADMIN", &config.admin_email).map_err(|reason| {
            DispatchError::Validation {
                field: "EMAIL_ADMIN",
                message: format!("Configurá EMAIL_ADMIN con un mail válido. {}", reason),
            }
        })?;
        let to = parse_addr("email (destinatario)", form.email()).map_err(|reason| {
            DispatchError::Validation {
                field: "email",
                message: format!("El email del cliente es inválido. {}", reason),
            }
        })?;

        let body = format!(
            "Cliente: {} {}\nTeléfono: {}\nEmail: {}\n\nCotización: Costo total ${}. Plan seleccionado: {}.",
            form.name(),
            form.surname(),
            form.phone(),
            to.email,
            cost,
            plan
        );

        let message = Message::builder()
            .from(Mailbox::new(
                Some(FROM_DISPLAY_NAME.to_string()),
                from.email.clone(),
            ))
            .to(to.clone())
            .to(admin)
            .subject("Cotización de Garantía")
            .body(body)
            .map_err(|e| DispatchError::Validation {
                field: "message",
                message: format!("No se pudo armar el mensaje: {}", e),
            })?;

        info!("📧 Attempting to send email to: {}", to.email);

        let transport = Arc::clone(&self.transport);
        let send_config = config.clone();
        let send_task = tokio::task::spawn_blocking(move || transport.deliver(&send_config, &message));

        match tokio::time::timeout(self.send_timeout, send_task).await {
            Ok(Ok(Ok(()))) => {
                info!("📧 Email sent successfully to: {}", to.email);
                Ok(DeliveryOutcome::Sent)
            }
            Ok(Ok(Err(e))) => {
                error!("Email send error: {:#}", e);
                Err(DispatchError::Transport(format!("{:#}", e)))
            }
            Ok(Err(join_error)) => {
                error!("Email send task failed: {}", join_error);
                Err(DispatchError::Transport(join_error.to_string()))
            }
            Err(_) => {
                warn!(
                    "Email send timeout after {:?}, abandoning in-flight attempt",
                    self.send_timeout
                );
                Err(DispatchError::Timeout)
            }
        }
    }
}

/// Trim and parse a mailbox address, reporting the failure in the
/// caller's words.
fn parse_addr(label: &str, addr: &str) -> std::result::Result<Mailbox, String> {
    let trimmed = addr.trim();
    if trimmed.is_empty() {
        return Err(format!("{} vacío", label));
    }
    trimmed
        .parse::<Mailbox>()
        .map_err(|e| format!("{} inválido ({})", label, e))
}
