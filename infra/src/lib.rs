//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's repository and mailer traits:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Mail**: HTTP mail-provider client using reqwest

pub mod database;
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
