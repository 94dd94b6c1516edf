//! Lake error types.

use thiserror::Error;

/// Lake operation errors.
#[derive(Debug, Error)]
pub enum LakeError {
    /// Parquet encoding of a snapshot failed.
    #[error("snapshot encoding failed: {0}")]
    Encode(String),

    /// Object not found in the lake.
    #[error("object not found: {key}")]
    NotFound {
        /// Object key that was not found.
        key: String,
    },

    /// Lake provider configuration error.
    #[error("lake configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("lake operation failed: {0}")]
    Operation(String),
}

impl LakeError {
    /// Create an encoding error.
    #[must_use]
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

impl From<opendal::Error> for LakeError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound {
                key: err.to_string(),
            },
            _ => Self::Operation(err.to_string()),
        }
    }
}

impl From<arrow::error::ArrowError> for LakeError {
    fn from(err: arrow::error::ArrowError) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for LakeError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        Self::Encode(err.to_string())
    }
}
