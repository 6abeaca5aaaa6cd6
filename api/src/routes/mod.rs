//! Route registration

pub mod auth;
