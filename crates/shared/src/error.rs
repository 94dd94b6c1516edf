//! Pipeline-wide error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias using `EtlError`.
pub type EtlResult<T> = Result<T, EtlError>;

/// Errors raised by the ETL stages.
///
/// Each stage maps its failures into exactly one variant so the run
/// coordinator can report which stage aborted the invocation.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Run window start is after its end.
    #[error("Invalid run window: start {start} is after end {end}")]
    InvalidWindow {
        /// Requested window start.
        start: DateTime<Utc>,
        /// Requested window end.
        end: DateTime<Utc>,
    },

    /// A database pool could not be established.
    #[error("Connection setup failed: {0}")]
    Connection(String),

    /// A source extraction query failed.
    #[error("Extraction failed: {0}")]
    Extract(String),

    /// A warehouse load (staging insert or table swap) failed.
    #[error("Warehouse load failed: {0}")]
    Load(String),

    /// The raw snapshot could not be encoded or written.
    #[error("Snapshot write failed: {0}")]
    Snapshot(String),

    /// An aggregate table rebuild failed.
    #[error("Aggregate rebuild failed: {0}")]
    Aggregate(String),

    /// The checkpoint file could not be read or written.
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),
}

impl EtlError {
    /// Create a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create an extraction error.
    #[must_use]
    pub fn extract(msg: impl Into<String>) -> Self {
        Self::Extract(msg.into())
    }

    /// Create a load error.
    #[must_use]
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Create a snapshot error.
    #[must_use]
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Create an aggregate rebuild error.
    #[must_use]
    pub fn aggregate(msg: impl Into<String>) -> Self {
        Self::Aggregate(msg.into())
    }

    /// Create a checkpoint error.
    #[must_use]
    pub fn checkpoint(msg: impl Into<String>) -> Self {
        Self::Checkpoint(msg.into())
    }

    /// Returns the stage name for structured logs.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidWindow { .. } => "window",
            Self::Connection(_) => "connect",
            Self::Extract(_) => "extract",
            Self::Load(_) => "load",
            Self::Snapshot(_) => "snapshot",
            Self::Aggregate(_) => "aggregate",
            Self::Checkpoint(_) => "checkpoint",
        }
    }
}
