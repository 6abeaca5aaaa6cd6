//! MySQL implementation of the UserRepository trait.
//!
//! Owns password hashing with bcrypt; raw passwords never leave this module
//! and only their hashes are stored in the `users` table.

use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use authkit_core::domain::entities::user::{User, UserRole};
use authkit_core::errors::{AuthError, DomainError};
use authkit_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn hash_password(password: &str) -> Result<String, DomainError> {
        hash(password, DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let role: String = row.try_get("role").map_err(|e| DomainError::Internal {
            message: format!("Failed to get role: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            role: match role.as_str() {
                "admin" => UserRole::Admin,
                _ => UserRole::User,
            },
            is_verified: row.try_get("is_verified").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_verified: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, role, is_verified, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.fetch_by_email(email).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, role, is_verified, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, DomainError> {
        // Unknown email and wrong password are indistinguishable to callers
        let user = self
            .fetch_by_email(email)
            .await?
            .ok_or(AuthError::LoginFailed)?;

        let matches = verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })?;
        if !matches {
            return Err(AuthError::LoginFailed.into());
        }

        Ok(user)
    }

    async fn create(&self, email: &str, password: &str) -> Result<User, DomainError> {
        if self.fetch_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let user = User::new(email, Self::hash_password(password)?);
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, role, is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.to_string())
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // The unique index on email backstops the pre-insert check
                // against racing registrations
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    DomainError::Auth(AuthError::EmailAlreadyExists)
                } else {
                    DomainError::Internal {
                        message: format!("Failed to create user: {}", e),
                    }
                }
            })?;

        Ok(user)
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), DomainError> {
        let query = r#"
            UPDATE users
            SET is_verified = TRUE, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to mark user verified: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound.into());
        }
        Ok(())
    }

    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        let password_hash = Self::hash_password(new_password)?;
        let query = r#"
            UPDATE users
            SET password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update password: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound.into());
        }
        Ok(())
    }
}
