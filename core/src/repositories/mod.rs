//! Repository interfaces and in-memory mock implementations

pub mod token;
pub mod user;

pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
