//! Outbound mail seam.
//!
//! The core only composes messages; delivery goes through the [`Mailer`]
//! trait so the transport (HTTP provider, SMTP relay) stays in the
//! infrastructure layer.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::MailError;

/// A composed message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

impl MailMessage {
    /// Email-confirmation message carrying the given link
    pub fn confirmation(to: impl Into<String>, link: &str) -> Self {
        Self {
            to: to.into(),
            subject: "Confirm your email address".to_string(),
            body: format!(
                "Welcome! Please confirm your email address by opening the link below.\n\n{}\n\n\
                 The link is valid for 24 hours. If you did not create an account, you can ignore this message.",
                link
            ),
        }
    }

    /// Password-reset message carrying the given link
    pub fn password_reset(to: impl Into<String>, link: &str) -> Self {
        Self {
            to: to.into(),
            subject: "Reset your password".to_string(),
            body: format!(
                "A password reset was requested for your account. Open the link below to choose a new password.\n\n{}\n\n\
                 The link is valid for 30 minutes. If you did not request a reset, you can ignore this message.",
                link
            ),
        }
    }
}

/// Contract for outbound mail delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a single message
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

/// Recording mailer for tests. Set `fail` to make every send report a
/// delivery error while still recording the attempt.
#[derive(Default)]
pub struct MockMailer {
    sent: Arc<RwLock<Vec<MailMessage>>>,
    fail: bool,
}

impl MockMailer {
    /// Creates a mailer that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mailer that rejects every message
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    /// Messages handed to `send` so far, in order
    pub async fn sent(&self) -> Vec<MailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        self.sent.write().await.push(message.clone());
        if self.fail {
            return Err(MailError::Delivery {
                message: "provider rejected the message".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message_carries_link() {
        let message = MailMessage::confirmation("a@x.com", "https://app.example/confirm?token=t1");
        assert_eq!(message.to, "a@x.com");
        assert!(message.body.contains("https://app.example/confirm?token=t1"));
    }

    #[tokio::test]
    async fn test_failing_mailer_records_the_attempt() {
        let mailer = MockMailer::failing();
        let message = MailMessage::password_reset("a@x.com", "https://app.example/reset?token=t1");

        assert!(mailer.send(&message).await.is_err());
        assert_eq!(mailer.sent().await.len(), 1);
    }
}
