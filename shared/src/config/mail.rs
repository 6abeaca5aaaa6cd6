//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound mail service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail API endpoint
    pub api_url: String,

    /// Mail API key
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Base URL for email confirmation links (token is appended)
    pub confirmation_url: String,

    /// Base URL for password reset links (token is appended)
    pub reset_password_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.mail.local/v1/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@authkit.local"),
            confirmation_url: String::from("http://localhost:8080/api/auth/confirm-email/"),
            reset_password_url: String::from("http://localhost:8080/reset-password?token="),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            confirmation_url: std::env::var("MAIL_CONFIRMATION_URL")
                .unwrap_or(defaults.confirmation_url),
            reset_password_url: std::env::var("MAIL_RESET_PASSWORD_URL")
                .unwrap_or(defaults.reset_password_url),
        }
    }
}
