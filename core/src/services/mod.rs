//! Business logic services

pub mod auth;
pub mod mail;
pub mod token;
