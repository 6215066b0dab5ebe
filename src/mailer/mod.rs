//! Contact-form delivery through a third-party email API.
//!
//! The form collects a structured payload and hands it to [`Mailer`], which
//! posts it from a background worker so the UI thread never blocks on the
//! network. Exactly two outcomes exist: sent, or failed with a message.

use std::sync::mpsc::Sender;
use std::sync::OnceLock;
use std::thread;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::config::ContactConfig;
use crate::ui::events::AppEvent;

/// The structured payload forwarded to the delivery API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Delivery service rejected the message (status {status})")]
    Rejected { status: u16 },

    #[error("Failed to start mail worker runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result of one send attempt, delivered back to the UI as an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailOutcome {
    Sent,
    Failed(String),
}

#[derive(Serialize)]
struct DeliveryRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// Client for the configured email-delivery endpoint.
#[derive(Debug, Clone)]
pub struct Mailer {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    to_email: String,
}

impl Mailer {
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            to_email: config.to_email.clone(),
        }
    }

    /// The delivery address messages are forwarded to.
    pub fn to_email(&self) -> &str {
        &self.to_email
    }

    /// Fills in the destination address and posts the payload from a worker
    /// thread; the outcome comes back on the event channel.
    pub fn send_in_background(
        &self,
        mut message: ContactMessage,
        events: Sender<AppEvent>,
    ) {
        message.to_email = self.to_email.clone();
        let mailer = self.clone();
        thread::spawn(move || {
            let outcome = match mailer.send_blocking(&message) {
                Ok(()) => {
                    info!(subject = %message.subject, "contact message delivered");
                    MailOutcome::Sent
                }
                Err(err) => {
                    error!(error = %err, "contact message delivery failed");
                    MailOutcome::Failed(err.to_string())
                }
            };
            let _ = events.send(AppEvent::Mail(outcome));
        });
    }

    fn send_blocking(&self, message: &ContactMessage) -> Result<(), MailerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.post(message))
    }

    async fn post(&self, message: &ContactMessage) -> Result<(), MailerError> {
        let client = reqwest::Client::new();
        let body = DeliveryRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: message,
        };
        let response = client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MailerError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Same check the original form applies before submitting: something@host
/// with a dot in the host part, no whitespace anywhere.
pub fn is_valid_email(candidate: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    re.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, Mailer};
    use crate::config::ContactConfig;

    #[test]
    fn from_config_wires_the_destination_address() {
        let config = ContactConfig {
            to_email: "hello@example.com".to_string(),
            ..ContactConfig::default()
        };
        let mailer = Mailer::from_config(&config);
        assert_eq!(mailer.to_email(), "hello@example.com");
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("ada@exa mple.com"));
    }
}
