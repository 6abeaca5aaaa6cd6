//! Scheduled and on-demand cleanup of stale refresh-token records.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use tokio::task::JoinHandle;

use crate::errors::DomainResult;
use crate::repositories::TokenRepository;

/// Hour of day (UTC) at which the scheduled sweep runs
const SWEEP_HOUR: u32 = 3;

/// Periodic janitor for the refresh-token table.
///
/// The scheduled sweep removes everything past its expiry, revoked or not.
/// The on-demand sweep is stricter and only removes records that are both
/// revoked and expired, so an operator-triggered run never shortens the
/// audit trail of still-ticking revoked tokens.
pub struct CleanupScheduler<R: TokenRepository> {
    repository: Arc<R>,
}

impl<R: TokenRepository + 'static> CleanupScheduler<R> {
    /// Creates a scheduler over the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deletes every record past its expiry, returning the count
    pub async fn run_scheduled_sweep(&self) -> DomainResult<usize> {
        let deleted = self.repository.delete_expired(Utc::now()).await?;
        tracing::info!(deleted, "expired refresh tokens swept");
        Ok(deleted)
    }

    /// Deletes only records that are both revoked and expired
    pub async fn run_on_demand(&self) -> DomainResult<usize> {
        let deleted = self
            .repository
            .delete_revoked_and_expired(Utc::now())
            .await?;
        tracing::info!(deleted, "revoked and expired refresh tokens swept");
        Ok(deleted)
    }

    /// Spawns the daily sweep loop. Sweep failures are logged and the loop
    /// keeps running; abort the returned handle to stop it.
    pub fn start(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(next_run_delay(Utc::now())).await;
                match repository.delete_expired(Utc::now()).await {
                    Ok(deleted) => {
                        tracing::info!(deleted, "scheduled refresh token sweep completed")
                    }
                    Err(e) => tracing::error!(error = %e, "scheduled refresh token sweep failed"),
                }
            }
        })
    }
}

/// Time until the next scheduled sweep at [`SWEEP_HOUR`]:00 UTC
pub fn next_run_delay(now: DateTime<Utc>) -> StdDuration {
    let today_run = now
        .date_naive()
        .and_hms_opt(SWEEP_HOUR, 0, 0)
        .expect("in-range wall clock time")
        .and_utc();
    let next_run = if now < today_run {
        today_run
    } else {
        today_run + Duration::days(1)
    };
    (next_run - now).to_std().unwrap_or_default()
}
