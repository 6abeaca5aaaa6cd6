//! Token services: signing, refresh-token lifecycle and scheduled cleanup

mod cleanup;
mod config;
mod issuer;
mod lifecycle;

pub use cleanup::{next_run_delay, CleanupScheduler};
pub use config::TokenConfig;
pub use issuer::TokenIssuer;
pub use lifecycle::RefreshTokenLifecycle;

#[cfg(test)]
mod tests;
