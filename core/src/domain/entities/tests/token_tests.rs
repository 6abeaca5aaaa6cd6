use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{
    Claims, RefreshToken, TokenPair, TokenPurpose, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_AUDIENCE,
    JWT_ISSUER, REFRESH_TOKEN_EXPIRY_DAYS,
};

#[test]
fn test_access_claims_creation() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new(
        user_id.to_string(),
        Some("a@x.com".to_string()),
        TokenPurpose::Access,
        Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
    );

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email.as_deref(), Some("a@x.com"));
    assert_eq!(claims.purpose, TokenPurpose::Access);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert!(!claims.is_expired());
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[test]
fn test_claims_expiration() {
    let mut claims = Claims::new(
        "someone@x.com",
        None,
        TokenPurpose::ResetPassword,
        Duration::minutes(30),
    );
    claims.exp = Utc::now().timestamp() - 1;
    assert!(claims.is_expired());
}

#[test]
fn test_purpose_wire_names() {
    assert_eq!(
        serde_json::to_string(&TokenPurpose::EmailConfirm).unwrap(),
        "\"email-confirm\""
    );
    assert_eq!(
        serde_json::to_string(&TokenPurpose::ResetPassword).unwrap(),
        "\"reset-password\""
    );
    assert_eq!(serde_json::to_string(&TokenPurpose::Access).unwrap(), "\"access\"");
    assert_eq!(serde_json::to_string(&TokenPurpose::Refresh).unwrap(), "\"refresh\"");
}

#[test]
fn test_refresh_token_creation() {
    let user_id = Uuid::new_v4();
    let token = RefreshToken::new(user_id, "hash".to_string());

    assert_eq!(token.user_id, user_id);
    assert!(!token.is_revoked);
    assert!(!token.is_expired());

    let remaining = token.expires_at - Utc::now();
    assert!(remaining <= Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));
    assert!(remaining > Duration::days(REFRESH_TOKEN_EXPIRY_DAYS - 1));
}

#[test]
fn test_refresh_token_revocation() {
    let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string());
    token.revoke();
    assert!(token.is_revoked);
}

#[test]
fn test_refresh_token_expiry_boundary() {
    let mut token = RefreshToken::new(Uuid::new_v4(), "hash".to_string());
    let now = Utc::now();

    token.expires_at = now;
    assert!(token.is_expired_at(now));

    token.expires_at = now + Duration::seconds(1);
    assert!(!token.is_expired_at(now));
}

#[test]
fn test_token_pair_expiry_seconds() {
    let pair = TokenPair::new("access".to_string(), "refresh".to_string());
    assert_eq!(pair.access_expires_in, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
    assert_eq!(pair.refresh_expires_in, REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
}
