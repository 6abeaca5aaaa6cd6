//! Authentication service orchestrating users, tokens and mail.

use std::sync::Arc;

use authkit_shared::utils::validation::is_valid_email;
use uuid::Uuid;

use crate::domain::entities::token::{TokenPair, TokenPurpose};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::mail::{MailMessage, Mailer};
use crate::services::token::{RefreshTokenLifecycle, TokenIssuer};

use super::config::AuthServiceConfig;

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 8;

/// Front door for every authentication flow.
///
/// Collaborators are injected behind traits so the service is testable with
/// in-memory fakes and indifferent to the storage or mail transport.
pub struct AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: Mailer,
{
    user_repository: Arc<U>,
    lifecycle: RefreshTokenLifecycle<T>,
    issuer: Arc<TokenIssuer>,
    mailer: Arc<M>,
    config: AuthServiceConfig,
}

impl<U, T, M> AuthService<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: Mailer,
{
    /// Creates the service from its collaborators
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        issuer: Arc<TokenIssuer>,
        mailer: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        let lifecycle = RefreshTokenLifecycle::new(token_repository, Arc::clone(&issuer));
        Self {
            user_repository,
            lifecycle,
            issuer,
            mailer,
            config,
        }
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Unknown email and wrong password both surface as `LoginFailed`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self.user_repository.verify_credentials(email, password).await?;
        let pair = self.issue_session(&user).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(pair)
    }

    /// Exchanges a refresh token for a fresh token pair, rotating it.
    ///
    /// Validity comes from the persisted record alone; the presented value's
    /// own expiry claim is not consulted.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let (new_raw, record) = self.lifecycle.rotate(refresh_token).await?;

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        let access_token = self
            .issuer
            .issue(user.id.to_string(), Some(user.email.clone()), TokenPurpose::Access)?;

        tracing::debug!(user_id = %user.id, "session refreshed");
        Ok(TokenPair::new(access_token, new_raw))
    }

    /// Resolves an access token to the user id it was minted for
    pub fn authenticate(&self, access_token: &str) -> DomainResult<Uuid> {
        let claims = self
            .issuer
            .parse_and_verify(access_token, TokenPurpose::Access)?;
        claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidSignature))
    }

    /// Ends the session holding the given refresh token. Succeeds even when
    /// the token is unknown or already revoked.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.lifecycle.revoke(refresh_token).await
    }

    /// Ends every session the user holds, returning the count
    pub async fn logout_all(&self, user_id: Uuid) -> DomainResult<usize> {
        self.lifecycle.revoke_all_for_user(user_id).await
    }

    /// Registers a new account and sends the confirmation mail.
    ///
    /// The account is created first; a mail failure is reported to the
    /// caller but never rolls the account back.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        Self::check_email(email)?;
        Self::check_password(password)?;

        let user = self.user_repository.create(email, password).await?;
        tracing::info!(user_id = %user.id, "user registered");

        self.send_confirmation_to(&user).await?;
        Ok(user)
    }

    /// Sends (or resends) the email-confirmation mail. A no-op for accounts
    /// that are already verified.
    pub async fn send_email_confirmation(&self, email: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if user.is_verified {
            return Ok(());
        }
        self.send_confirmation_to(&user).await
    }

    /// Marks the account behind a confirmation token as verified.
    ///
    /// Confirming an already-verified account succeeds.
    pub async fn confirm_email(&self, token: &str) -> DomainResult<()> {
        let claims = self
            .issuer
            .parse_and_verify(token, TokenPurpose::EmailConfirm)?;
        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if user.is_verified {
            return Ok(());
        }

        self.user_repository.mark_verified(user.id).await?;
        tracing::info!(user_id = %user.id, "email confirmed");
        Ok(())
    }

    /// Sends the password-reset mail for the given account
    pub async fn send_reset_password(&self, email: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let token = self
            .issuer
            .issue(user.email.clone(), None, TokenPurpose::ResetPassword)?;
        let link = format!("{}?token={}", self.config.reset_password_url, token);
        self.mailer
            .send(&MailMessage::password_reset(user.email, &link))
            .await?;

        tracing::info!(user_id = %user.id, "password reset mail sent");
        Ok(())
    }

    /// Replaces the password behind a reset token and ends every open
    /// session for that account.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        Self::check_password(new_password)?;

        let claims = self
            .issuer
            .parse_and_verify(token, TokenPurpose::ResetPassword)?;
        let user = self
            .user_repository
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.user_repository
            .update_password(user.id, new_password)
            .await?;
        self.lifecycle.revoke_all_for_user(user.id).await?;

        tracing::info!(user_id = %user.id, "password reset");
        Ok(())
    }

    async fn issue_session(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self
            .issuer
            .issue(user.id.to_string(), Some(user.email.clone()), TokenPurpose::Access)?;
        let refresh_token = self.lifecycle.create(user.id).await?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    async fn send_confirmation_to(&self, user: &User) -> DomainResult<()> {
        let token = self
            .issuer
            .issue(user.email.clone(), None, TokenPurpose::EmailConfirm)?;
        let link = format!("{}?token={}", self.config.confirmation_url, token);
        self.mailer
            .send(&MailMessage::confirmation(user.email.clone(), &link))
            .await?;
        Ok(())
    }

    fn check_email(email: &str) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Invalid email address format".to_string(),
            });
        }
        Ok(())
    }

    fn check_password(password: &str) -> DomainResult<()> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation {
                message: format!(
                    "Password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            });
        }
        Ok(())
    }
}
