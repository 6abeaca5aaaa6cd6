//! Authentication and cookie configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry in days (also the persisted record lifetime)
    pub refresh_token_expiry_days: i64,

    /// Email confirmation token expiry in hours
    pub email_confirm_expiry_hours: i64,

    /// Password reset token expiry in minutes
    pub reset_password_expiry_minutes: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 30,
            email_confirm_expiry_hours: 24,
            reset_password_expiry_minutes: 30,
            issuer: String::from("authkit"),
            audience: String::from("authkit-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// Refresh-token cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name carrying the refresh token
    pub name: String,

    /// Secure flag (HTTPS only); set false only for local non-TLS development
    pub secure: bool,

    /// Path restriction for the cookie
    pub path: String,

    /// Cookie max-age in days
    pub max_age_days: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refreshToken"),
            secure: true,
            path: String::from("/api/auth/refresh-token"),
            max_age_days: 30,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh-token cookie configuration
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v != "false")
            .unwrap_or(true);

        Self {
            jwt: JwtConfig {
                secret,
                ..Default::default()
            },
            cookie: CookieConfig {
                secure: cookie_secure,
                ..Default::default()
            },
        }
    }
}
