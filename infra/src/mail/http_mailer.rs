//! HTTP mail-provider implementation of the Mailer trait.
//!
//! Posts messages as JSON to a transactional mail API, authenticated with a
//! bearer token. Provider failures surface as `MailError::Delivery` so the
//! core can decide whether delivery is fatal to the flow.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use authkit_core::errors::MailError;
use authkit_core::services::mail::{MailMessage, Mailer};
use authkit_shared::config::MailConfig;

use crate::InfrastructureError;

/// Timeout for mail API requests
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Request body expected by the mail provider
#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// HTTP mail-provider client
pub struct HttpMailer {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailer {
    /// Create a new mailer for the given provider configuration
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailConfig::from_env())
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let body = SendRequest {
            from: &self.config.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "mail provider request failed");
                MailError::Delivery {
                    message: format!("Mail provider unreachable: {}", e),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "mail provider rejected the message");
            return Err(MailError::Delivery {
                message: format!("Mail provider returned {}", status),
            });
        }

        debug!(to = %message.to, "mail accepted by provider");
        Ok(())
    }
}
