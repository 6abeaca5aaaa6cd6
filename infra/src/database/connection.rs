//! MySQL connection pool management

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use authkit_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Creates a connection pool from the given configuration.
///
/// Fails fast: the pool performs an initial connection before returning, so
/// a bad URL is caught at startup rather than on the first query.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database connection pool created"
    );
    Ok(pool)
}
