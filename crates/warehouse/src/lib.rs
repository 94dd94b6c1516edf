//! Postgres access for the expense pipeline.
//!
//! This crate provides:
//! - A read-only store over the operational source database
//! - A warehouse store that replaces fact and dimension tables atomically
//! - Aggregate table rebuilds on top of `fact_expenses`

mod aggregates;
mod sink;
mod source;

pub use sink::WarehouseStore;
pub use source::SourceStore;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use spendlake_shared::config::DatabaseConfig;

/// Establishes a connection pool for the given database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.connection_string)
        .await
}
