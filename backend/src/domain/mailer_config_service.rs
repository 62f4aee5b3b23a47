//! Loading of SMTP transport settings.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// SMTP transport settings for quote notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    /// Sender identity, used as the From address
    pub from_email: String,
    /// SMTP auth principal (for Gmail usually the same as `from_email`)
    pub username: String,
    /// SMTP auth secret (a Gmail app password)
    pub password: String,
    /// Internal recipient that receives a copy of every quote
    pub admin_email: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            from_email: String::new(),
            username: String::new(),
            password: String::new(),
            admin_email: String::new(),
        }
    }
}

pub struct MailerConfigService;

impl MailerConfigService {
    /// Read the transport settings from the process environment
    /// (`EMAIL_FROM`, `EMAIL_USER`, `EMAIL_PASS`, `EMAIL_ADMIN`).
    ///
    /// Missing variables yield empty fields; presence is validated at
    /// dispatch time, on every call, so settings corrected between
    /// attempts take effect immediately.
    pub fn from_env() -> MailerConfig {
        MailerConfig {
            from_email: env_trimmed("EMAIL_FROM"),
            username: env_trimmed("EMAIL_USER"),
            password: env_trimmed("EMAIL_PASS"),
            admin_email: env_trimmed("EMAIL_ADMIN"),
            ..MailerConfig::default()
        }
    }

    /// Load the transport settings from a TOML file.
    pub fn load_config(config_path: &Path) -> Result<MailerConfig> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read mailer config file: {:?}", config_path))?;

        let config: MailerConfig = toml::from_str(&config_content)
            .with_context(|| "Failed to parse mailer config TOML")?;

        // Validate required fields
        if config.username.is_empty() {
            return Err(anyhow::anyhow!("Mailer username is required"));
        }
        if config.password.is_empty() {
            return Err(anyhow::anyhow!("Mailer password is required"));
        }
        if config.from_email.is_empty() {
            return Err(anyhow::anyhow!("From email is required"));
        }
        if config.admin_email.is_empty() {
            return Err(anyhow::anyhow!("Admin email is required"));
        }

        Ok(config)
    }

    pub fn load_config_or_default(config_path: &Path) -> MailerConfig {
        match Self::load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load mailer config from {:?}: {}", config_path, e);
                log::info!("Using default mailer config (environment variables still apply)");
                MailerConfig::default()
            }
        }
    }
}

fn env_trimmed(key: &str) -> String {
    std::env::var(key)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
