//! Refresh-token lifecycle: creation, validation, rotation and revocation.
//!
//! The persisted record is the source of truth for validity. The signed
//! value's own expiry claim is advisory only; validation never parses it.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, TokenPurpose};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::TokenRepository;

use super::issuer::TokenIssuer;

/// Drives refresh-token state transitions against a [`TokenRepository`]
pub struct RefreshTokenLifecycle<R: TokenRepository> {
    repository: Arc<R>,
    issuer: Arc<TokenIssuer>,
}

impl<R: TokenRepository> RefreshTokenLifecycle<R> {
    /// Creates a lifecycle service over the given repository and issuer
    pub fn new(repository: Arc<R>, issuer: Arc<TokenIssuer>) -> Self {
        Self { repository, issuer }
    }

    /// SHA-256 hex digest of a raw token value, the repository lookup key
    pub fn hash_token(raw: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(raw.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Mints a new refresh token for the user and persists its record.
    ///
    /// Returns the raw signed value; only its hash is stored.
    pub async fn create(&self, user_id: Uuid) -> DomainResult<String> {
        let raw = self
            .issuer
            .issue(user_id.to_string(), None, TokenPurpose::Refresh)?;
        let days = self.issuer.config().refresh_ttl.num_days();
        let record = RefreshToken::with_expiry_days(user_id, Self::hash_token(&raw), days);
        self.repository.save(record).await?;

        tracing::debug!(user_id = %user_id, "refresh token created");
        Ok(raw)
    }

    /// Resolves a raw token value to its active record.
    ///
    /// Checks run in a fixed order: a missing record is `NotFound`, a revoked
    /// record is `Revoked` even when it has also expired, and only then is an
    /// expired record `Expired`.
    pub async fn validate(&self, raw: &str) -> DomainResult<RefreshToken> {
        let record = self
            .repository
            .find_by_token(&Self::hash_token(raw))
            .await?
            .ok_or(TokenError::NotFound)?;

        if record.is_revoked {
            return Err(TokenError::Revoked.into());
        }
        if record.is_expired_at(Utc::now()) {
            return Err(TokenError::Expired.into());
        }

        Ok(record)
    }

    /// Exchanges an active token for a fresh one, revoking the old record.
    ///
    /// The repository's conditional revoke is the linearization point: under
    /// concurrent rotation of the same token exactly one caller claims the
    /// record and every other caller observes `Revoked`.
    pub async fn rotate(&self, raw: &str) -> DomainResult<(String, RefreshToken)> {
        let record = self.validate(raw).await?;

        let claimed = self.repository.revoke(&record.token_hash).await?;
        if !claimed {
            // Lost the race, or the record vanished between read and claim
            return match self.repository.find_by_token(&record.token_hash).await? {
                None => Err(TokenError::NotFound.into()),
                Some(_) => Err(TokenError::Revoked.into()),
            };
        }

        let new_raw = self.create(record.user_id).await?;
        let new_record = self
            .repository
            .find_by_token(&Self::hash_token(&new_raw))
            .await?
            .ok_or(TokenError::NotFound)?;

        tracing::debug!(user_id = %record.user_id, "refresh token rotated");
        Ok((new_raw, new_record))
    }

    /// Revokes a token by raw value. Succeeds whether or not the record
    /// exists or was already revoked.
    pub async fn revoke(&self, raw: &str) -> DomainResult<()> {
        self.repository.revoke(&Self::hash_token(raw)).await?;
        Ok(())
    }

    /// Deletes every refresh token the user owns, returning the count
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> DomainResult<usize> {
        let deleted = self.repository.delete_by_user(user_id).await?;
        tracing::info!(user_id = %user_id, deleted, "all refresh tokens revoked for user");
        Ok(deleted)
    }
}
