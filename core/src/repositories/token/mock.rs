//! In-memory implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository.
///
/// The write lock makes `revoke` a single critical section, reproducing the
/// conditional-update linearization of the SQL implementation.
#[derive(Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored (test helper)
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_revoked => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.user_id != user_id);
        Ok(before - tokens.len())
    }

    async fn delete_by_token(&self, token_hash: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token_hash);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| token.expires_at >= now);
        Ok(before - tokens.len())
    }

    async fn delete_revoked_and_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, token| !(token.is_revoked && token.expires_at < now));
        Ok(before - tokens.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn expired_token(user_id: Uuid, hash: &str, revoked: bool) -> RefreshToken {
        let mut token = RefreshToken::new(user_id, hash.to_string());
        token.expires_at = Utc::now() - Duration::days(1);
        token.is_revoked = revoked;
        token
    }

    #[tokio::test]
    async fn test_revoke_is_conditional() {
        let repo = MockTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "h1".to_string());
        repo.save(token).await.unwrap();

        assert!(repo.revoke("h1").await.unwrap());
        // Second attempt finds an already-revoked record
        assert!(!repo.revoke("h1").await.unwrap());
        // Missing record
        assert!(!repo.revoke("h2").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_token_removes_a_single_record() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();
        repo.save(RefreshToken::new(user_id, "h1".to_string())).await.unwrap();
        repo.save(RefreshToken::new(user_id, "h2".to_string())).await.unwrap();

        repo.delete_by_token("h1").await.unwrap();
        assert!(repo.find_by_token("h1").await.unwrap().is_none());
        assert!(repo.find_by_token("h2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_expired_ignores_revocation_flag() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();
        repo.save(expired_token(user_id, "expired", false)).await.unwrap();
        repo.save(expired_token(user_id, "expired-revoked", true)).await.unwrap();
        repo.save(RefreshToken::new(user_id, "live".to_string())).await.unwrap();

        let deleted = repo.delete_expired(Utc::now()).await.unwrap();
        assert_eq!(deleted, 2);
        assert!(repo.find_by_token("live").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_revoked_and_expired_is_an_intersection() {
        let repo = MockTokenRepository::new();
        let user_id = Uuid::new_v4();
        repo.save(expired_token(user_id, "expired-only", false)).await.unwrap();
        repo.save(expired_token(user_id, "both", true)).await.unwrap();
        let mut revoked_live = RefreshToken::new(user_id, "revoked-only".to_string());
        revoked_live.is_revoked = true;
        repo.save(revoked_live).await.unwrap();

        let deleted = repo.delete_revoked_and_expired(Utc::now()).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(repo.find_by_token("both").await.unwrap().is_none());
        assert!(repo.find_by_token("expired-only").await.unwrap().is_some());
        assert!(repo.find_by_token("revoked-only").await.unwrap().is_some());
    }
}
