//! Configuration modules for the AuthKit services

mod auth;
mod database;
mod mail;
mod server;

pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;
