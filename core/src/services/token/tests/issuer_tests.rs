use chrono::Duration;

use crate::domain::entities::token::TokenPurpose;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenConfig, TokenIssuer};

fn issuer() -> TokenIssuer {
    TokenIssuer::new(TokenConfig::new("test-secret-at-least-32-bytes-long"))
}

#[test]
fn test_issue_and_verify_round_trip() {
    let issuer = issuer();
    let raw = issuer
        .issue("user-1", Some("a@x.com".to_string()), TokenPurpose::Access)
        .unwrap();

    let claims = issuer.parse_and_verify(&raw, TokenPurpose::Access).unwrap();
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.email.as_deref(), Some("a@x.com"));
    assert_eq!(claims.purpose, TokenPurpose::Access);
}

#[test]
fn test_purpose_mismatch_is_rejected() {
    let issuer = issuer();
    let raw = issuer
        .issue("a@x.com", None, TokenPurpose::EmailConfirm)
        .unwrap();

    let err = issuer
        .parse_and_verify(&raw, TokenPurpose::ResetPassword)
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::WrongPurpose)));
}

#[test]
fn test_expired_token_is_rejected_as_expired() {
    let mut config = TokenConfig::new("test-secret-at-least-32-bytes-long");
    config.access_ttl = Duration::seconds(-10);
    let issuer = TokenIssuer::new(config);

    let raw = issuer.issue("user-1", None, TokenPurpose::Access).unwrap();
    let err = issuer.parse_and_verify(&raw, TokenPurpose::Access).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_tampered_signature_is_rejected() {
    let issuer = issuer();
    let mut raw = issuer.issue("user-1", None, TokenPurpose::Access).unwrap();

    let last = raw.pop().unwrap();
    raw.push(if last == 'A' { 'B' } else { 'A' });

    let err = issuer.parse_and_verify(&raw, TokenPurpose::Access).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let issuer_a = issuer();
    let issuer_b = TokenIssuer::new(TokenConfig::new("a-completely-different-signing-secret"));

    let raw = issuer_a.issue("user-1", None, TokenPurpose::Access).unwrap();
    let err = issuer_b
        .parse_and_verify(&raw, TokenPurpose::Access)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}
