//! Job configuration management.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::EtlError;

/// Top-level ETL job configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EtlConfig {
    /// Operational store expenses are extracted from.
    pub source_database: DatabaseConfig,
    /// Warehouse that facts, dimensions, and aggregates are loaded into.
    pub data_warehouse: DatabaseConfig,
    /// Object-store credentials for raw snapshots.
    pub s3: S3Config,
    /// Incremental-run checkpoint settings.
    #[serde(default)]
    pub checkpoint: CheckpointConfig,
}

/// Connection settings for one database role.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub connection_string: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Credentials and bucket for the S3 data lake.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Bucket region.
    pub region: String,
    /// Bucket holding raw snapshots.
    pub bucket: String,
    /// Custom endpoint for S3-compatible stores (MinIO, R2). `None` for AWS.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Incremental-run checkpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckpointConfig {
    /// Path of the JSON state file.
    #[serde(default = "default_checkpoint_path")]
    pub path: PathBuf,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            path: default_checkpoint_path(),
        }
    }
}

fn default_checkpoint_path() -> PathBuf {
    PathBuf::from("etl_state.json")
}

impl EtlConfig {
    /// Loads configuration from a file plus environment overrides.
    ///
    /// Environment variables use the `SPENDLAKE` prefix with `__` as the
    /// nesting separator, e.g. `SPENDLAKE_S3__BUCKET`.
    ///
    /// # Errors
    ///
    /// Returns an error if no source provides a required key or a value
    /// fails to deserialize.
    pub fn load(path: &str) -> Result<Self, EtlError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SPENDLAKE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
