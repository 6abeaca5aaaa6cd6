//! Auth service configuration

use authkit_shared::config::MailConfig;

/// Frontend link targets embedded in outbound mail.
///
/// The signed token is appended as a `token` query parameter.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Page that posts the token to the email-confirmation endpoint
    pub confirmation_url: String,
    /// Page that posts the token and new password to the reset endpoint
    pub reset_password_url: String,
}

impl AuthServiceConfig {
    /// Creates a configuration with explicit link targets
    pub fn new(confirmation_url: impl Into<String>, reset_password_url: impl Into<String>) -> Self {
        Self {
            confirmation_url: confirmation_url.into(),
            reset_password_url: reset_password_url.into(),
        }
    }
}

impl From<&MailConfig> for AuthServiceConfig {
    fn from(config: &MailConfig) -> Self {
        Self {
            confirmation_url: config.confirmation_url.clone(),
            reset_password_url: config.reset_password_url.clone(),
        }
    }
}
