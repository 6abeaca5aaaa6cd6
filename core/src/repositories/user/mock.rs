//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// In-memory user directory. Passwords are stored with a marker prefix
/// instead of a real hash; only the comparison semantics matter in tests.
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock directory
    pub fn new() -> Self {
        Self::default()
    }

    fn fake_hash(password: &str) -> String {
        format!("hashed:{password}")
    }

    /// Insert a pre-built user (test helper)
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Remove a user (test helper)
    pub async fn remove(&self, id: Uuid) {
        self.users.write().await.remove(&id);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email == email && u.password_hash == Self::fake_hash(password))
            .cloned()
            .ok_or(DomainError::Auth(AuthError::LoginFailed))
    }

    async fn create(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyExists));
        }
        let user = User::new(email, Self::fake_hash(password));
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user_id) {
            Some(user) => {
                user.verify();
                Ok(())
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }

    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user_id) {
            Some(user) => {
                user.password_hash = Self::fake_hash(new_password);
                user.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create("a@x.com", "pw").await.unwrap();

        let err = repo.create("a@x.com", "pw2").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let repo = MockUserRepository::new();
        repo.create("a@x.com", "pw").await.unwrap();

        let user = repo.verify_credentials("a@x.com", "pw").await.unwrap();
        assert_eq!(user.email, "a@x.com");

        let err = repo.verify_credentials("a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::LoginFailed)));
    }
}
