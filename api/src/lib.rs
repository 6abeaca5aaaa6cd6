//! HTTP API layer for the AuthKit backend.
//!
//! Exposes the authentication endpoints over actix-web. Handlers are generic
//! over the core's repository and mailer traits so integration tests can run
//! the full HTTP stack against in-memory fakes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
