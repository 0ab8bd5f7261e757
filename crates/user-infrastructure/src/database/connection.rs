//! Database connection pool

use log::LevelFilter;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use user_shared::config::DatabaseSettings;

/// Opens a pool sized for `workers` concurrent requests. Each repository call
/// borrows one connection and hands it back when the statement completes.
pub async fn create_pool(settings: &DatabaseSettings, workers: usize) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&settings.url)?;
    options = if settings.echo_sql {
        options.log_statements(LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    };

    let max_connections = settings.pool_size(workers);
    let min_connections = settings.min_connections.min(max_connections);
    info!(max_connections, min_connections, "Opening database pool");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_seconds))
        .connect_with(options)
        .await
}
