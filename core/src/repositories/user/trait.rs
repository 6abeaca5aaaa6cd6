//! User repository trait for the external user directory.
//!
//! Credential storage and password hashing live behind this seam;
//! implementations own the hashing scheme, the core never sees it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Contract for user-directory operations consumed by the auth flows
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Verify email/password credentials.
    ///
    /// Fails with `AuthError::LoginFailed` on an unknown email or a password
    /// mismatch; callers cannot distinguish the two.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, DomainError>;

    /// Create a new user from raw credentials, hashing the password.
    ///
    /// Fails with `AuthError::EmailAlreadyExists` when the email is taken;
    /// implementations back this with a uniqueness constraint so a racing
    /// insert surfaces the same error.
    async fn create(&self, email: &str, password: &str) -> Result<User, DomainError>;

    /// Mark a user's email as confirmed
    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError>;

    /// Replace a user's password with a hash of the new one
    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError>;
}
