//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Persistence contract for refresh-token records, keyed by token hash.
///
/// The trait carries no business rules; lifecycle decisions (check ordering,
/// rotation, idempotency) live in the token lifecycle service. `revoke` must
/// be implemented as a single atomic conditional update: it flips
/// `is_revoked` only when the record is currently active and reports whether
/// it did, which is what makes concurrent rotation race-safe.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert or update a refresh-token record by primary key
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    async fn find_by_token(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically flip `is_revoked` on a currently-active record.
    ///
    /// Returns `true` only if this call performed the flip. A record that is
    /// missing or already revoked yields `false`.
    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete every refresh token owned by a user, returning the count
    async fn delete_by_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete a single refresh token by its hashed value
    async fn delete_by_token(&self, token_hash: &str) -> Result<(), DomainError>;

    /// Delete all records with `expires_at < now`, regardless of revocation
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Delete only records that are both revoked and expired.
    ///
    /// Intersection semantics, deliberately narrower than `delete_expired`.
    async fn delete_revoked_and_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
