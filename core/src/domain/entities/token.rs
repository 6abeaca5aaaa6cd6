//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (30 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT issuer
pub const JWT_ISSUER: &str = "authkit";

/// JWT audience
pub const JWT_AUDIENCE: &str = "authkit-api";

/// Purpose tag embedded in every signed token.
///
/// A token minted for one purpose is never accepted by a validation path
/// expecting another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenPurpose {
    /// Short-lived credential presented on each authenticated request
    Access,
    /// Long-lived credential exchanged for a new token pair
    Refresh,
    /// Single-purpose token gating email confirmation
    EmailConfirm,
    /// Single-purpose token gating password reset
    ResetPassword,
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TokenPurpose::Access => "access",
            TokenPurpose::Refresh => "refresh",
            TokenPurpose::EmailConfirm => "email-confirm",
            TokenPurpose::ResetPassword => "reset-password",
        };
        f.write_str(s)
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, or the email address for single-purpose tokens)
    pub sub: String,

    /// Email address the token refers to, when known at mint time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// What this token may be used for
    pub purpose: TokenPurpose,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a token of the given purpose and lifetime
    pub fn new(sub: impl Into<String>, email: Option<String>, purpose: TokenPurpose, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            email,
            purpose,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user id from the claims, when the subject is one
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record persisted in the database.
///
/// The raw token value is never stored; lookups go through its SHA-256 hash.
/// Once `is_revoked` flips to true it never reverts, and `expires_at` is
/// fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// User id this token belongs to
    pub user_id: Uuid,

    /// Hashed token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new active refresh token expiring in
    /// [`REFRESH_TOKEN_EXPIRY_DAYS`] days
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self::with_expiry_days(user_id, token_hash, REFRESH_TOKEN_EXPIRY_DAYS)
    }

    /// Creates a new active refresh token with an explicit lifetime
    pub fn with_expiry_days(user_id: Uuid, token_hash: String, days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(days),
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Revokes the refresh token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Access/refresh token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Refresh token value
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the default expiry times
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_expires_in: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}
