use std::sync::Arc;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockTokenRepository, MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mail::MockMailer;
use crate::services::token::{TokenConfig, TokenIssuer};

type Service = AuthService<MockUserRepository, MockTokenRepository, MockMailer>;

struct Fixture {
    users: Arc<MockUserRepository>,
    tokens: Arc<MockTokenRepository>,
    mailer: Arc<MockMailer>,
    service: Service,
}

fn fixture() -> Fixture {
    fixture_with_mailer(MockMailer::new())
}

fn fixture_with_mailer(mailer: MockMailer) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let mailer = Arc::new(mailer);
    let issuer = Arc::new(TokenIssuer::new(TokenConfig::new(
        "test-secret-at-least-32-bytes-long",
    )));
    let config = AuthServiceConfig::new(
        "https://app.example/confirm-email",
        "https://app.example/reset-password",
    );
    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&tokens),
        issuer,
        Arc::clone(&mailer),
        config,
    );
    Fixture {
        users,
        tokens,
        mailer,
        service,
    }
}

/// Pulls the signed token out of a mailed link
fn token_from_body(body: &str) -> String {
    let start = body.find("token=").expect("mail body carries a token link") + "token=".len();
    body[start..]
        .split_whitespace()
        .next()
        .expect("token is not empty")
        .to_string()
}

#[tokio::test]
async fn test_login_and_refresh_rotate_the_session() {
    let f = fixture();
    f.users.create("a@x.com", "password123").await.unwrap();

    let pair = f.service.login("a@x.com", "password123").await.unwrap();
    let refreshed = f.service.refresh(&pair.refresh_token).await.unwrap();
    assert_ne!(refreshed.refresh_token, pair.refresh_token);

    // The superseded token is dead
    let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));

    // The replacement still works
    f.service.refresh(&refreshed.refresh_token).await.unwrap();
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let f = fixture();
    f.users.create("a@x.com", "password123").await.unwrap();

    let err = f.service.login("a@x.com", "wrong-password").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::LoginFailed)));

    let err = f.service.login("nobody@x.com", "password123").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::LoginFailed)));
}

#[tokio::test]
async fn test_logout_kills_the_session_and_tolerates_repeats() {
    let f = fixture();
    f.users.create("a@x.com", "password123").await.unwrap();
    let pair = f.service.login("a@x.com", "password123").await.unwrap();

    f.service.logout(&pair.refresh_token).await.unwrap();
    let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));

    // Repeated and unknown logouts succeed
    f.service.logout(&pair.refresh_token).await.unwrap();
    f.service.logout("never-issued").await.unwrap();
}

#[tokio::test]
async fn test_logout_all_drops_every_session() {
    let f = fixture();
    let user = f.users.create("a@x.com", "password123").await.unwrap();
    let first = f.service.login("a@x.com", "password123").await.unwrap();
    let second = f.service.login("a@x.com", "password123").await.unwrap();

    let ended = f.service.logout_all(user.id).await.unwrap();
    assert_eq!(ended, 2);
    assert!(f.tokens.is_empty().await);

    let err = f.service.refresh(&first.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotFound)));
    let err = f.service.refresh(&second.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotFound)));
}

#[tokio::test]
async fn test_refresh_for_a_deleted_user_fails() {
    let f = fixture();
    let user = f.users.create("a@x.com", "password123").await.unwrap();
    let pair = f.service.login("a@x.com", "password123").await.unwrap();

    // The record's owner is looked up on every refresh
    f.users.remove(user.id).await;
    let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_register_creates_an_unverified_user_and_mails_a_confirmation() {
    let f = fixture();

    let user = f.service.register("a@x.com", "password123").await.unwrap();
    assert!(!user.is_verified);

    let sent = f.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
    assert!(sent[0].body.contains("https://app.example/confirm-email?token="));
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_bad_input() {
    let f = fixture();
    f.service.register("a@x.com", "password123").await.unwrap();

    let err = f.service.register("a@x.com", "password456").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::EmailAlreadyExists)));

    let err = f.service.register("not-an-email", "password123").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let err = f.service.register("b@x.com", "short").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn test_register_mail_failure_leaves_the_account_in_place() {
    let f = fixture_with_mailer(MockMailer::failing());

    let err = f.service.register("a@x.com", "password123").await.unwrap_err();
    assert!(matches!(err, DomainError::Mail(_)));

    // The account was created before the mail attempt and survives it
    let user = f.users.find_by_email("a@x.com").await.unwrap();
    assert!(user.is_some());
}

#[tokio::test]
async fn test_confirm_email_verifies_the_account_and_is_idempotent() {
    let f = fixture();
    f.service.register("a@x.com", "password123").await.unwrap();

    let token = token_from_body(&f.mailer.sent().await[0].body);
    f.service.confirm_email(&token).await.unwrap();

    let user = f.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(user.is_verified);

    // Confirming again still succeeds
    f.service.confirm_email(&token).await.unwrap();
}

#[tokio::test]
async fn test_confirm_email_rejects_tokens_of_another_purpose() {
    let f = fixture();
    f.users.create("a@x.com", "password123").await.unwrap();
    f.service.send_reset_password("a@x.com").await.unwrap();

    let reset_token = token_from_body(&f.mailer.sent().await[0].body);
    let err = f.service.confirm_email(&reset_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::WrongPurpose)));
}

#[tokio::test]
async fn test_resend_confirmation_is_a_noop_for_verified_accounts() {
    let f = fixture();
    f.service.register("a@x.com", "password123").await.unwrap();
    let token = token_from_body(&f.mailer.sent().await[0].body);
    f.service.confirm_email(&token).await.unwrap();

    f.service.send_email_confirmation("a@x.com").await.unwrap();
    assert_eq!(f.mailer.sent().await.len(), 1);

    let err = f
        .service
        .send_email_confirmation("nobody@x.com")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_password_reset_updates_credentials_and_ends_sessions() {
    let f = fixture();
    f.users.create("a@x.com", "old-password").await.unwrap();
    let pair = f.service.login("a@x.com", "old-password").await.unwrap();

    f.service.send_reset_password("a@x.com").await.unwrap();
    let token = token_from_body(&f.mailer.sent().await[0].body);
    f.service.reset_password(&token, "new-password").await.unwrap();

    // Old credentials and old sessions are both dead
    let err = f.service.login("a@x.com", "old-password").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::LoginFailed)));
    let err = f.service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotFound)));

    f.service.login("a@x.com", "new-password").await.unwrap();
}

#[tokio::test]
async fn test_reset_password_validates_the_new_password() {
    let f = fixture();
    f.users.create("a@x.com", "old-password").await.unwrap();
    f.service.send_reset_password("a@x.com").await.unwrap();

    let token = token_from_body(&f.mailer.sent().await[0].body);
    let err = f.service.reset_password(&token, "short").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    // The old password still works after the rejected attempt
    f.service.login("a@x.com", "old-password").await.unwrap();
}
