//! Database layer for data persistence and access.
//!
//! Built on SQLx with SQLite, following the repository pattern: API handlers
//! talk to the repositories in [`handlers`], which execute parameterized
//! statements against records defined in [`models`]. Errors are categorized
//! in [`errors`] so callers can tell expected outcomes (not found, unique
//! violation) apart from faults.

pub mod errors;
pub mod handlers;
pub mod models;

use crate::config::DatabaseConfig;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::{str::FromStr, time::Duration};

/// Build the connection pool from the configured database URL.
///
/// Timeouts are explicit: `busy_timeout` bounds how long a statement waits on
/// a locked database, `acquire_timeout` bounds how long a request waits for a
/// pooled connection. No retries, no health checks - a connection failure
/// surfaces directly to the caller.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_millis(config.acquire_timeout_ms))
        .connect_with(options)
        .await?;

    Ok(pool)
}
