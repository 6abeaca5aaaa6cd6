//! Token service configuration

use authkit_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::{
    TokenPurpose, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE, JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};

/// Signing material and per-purpose lifetimes for issued tokens
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Expected `iss` claim
    pub issuer: String,
    /// Expected `aud` claim
    pub audience: String,
    /// Lifetime of access tokens
    pub access_ttl: Duration,
    /// Lifetime of refresh tokens
    pub refresh_ttl: Duration,
    /// Lifetime of email-confirmation tokens
    pub email_confirm_ttl: Duration,
    /// Lifetime of password-reset tokens
    pub reset_password_ttl: Duration,
}

impl TokenConfig {
    /// Creates a configuration with the default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            access_ttl: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_ttl: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
            email_confirm_ttl: Duration::hours(24),
            reset_password_ttl: Duration::minutes(30),
        }
    }

    /// Lifetime applied to a token of the given purpose
    pub fn ttl_for(&self, purpose: TokenPurpose) -> Duration {
        match purpose {
            TokenPurpose::Access => self.access_ttl,
            TokenPurpose::Refresh => self.refresh_ttl,
            TokenPurpose::EmailConfirm => self.email_confirm_ttl,
            TokenPurpose::ResetPassword => self.reset_password_ttl,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_ttl: Duration::minutes(config.access_token_expiry_minutes),
            refresh_ttl: Duration::days(config.refresh_token_expiry_days),
            email_confirm_ttl: Duration::hours(config.email_confirm_expiry_hours),
            reset_password_ttl: Duration::minutes(config.reset_password_expiry_minutes),
        }
    }
}
