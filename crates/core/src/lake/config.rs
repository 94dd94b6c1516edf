//! Lake provider configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lake provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LakeProvider {
    /// S3-compatible storage: AWS S3, Cloudflare R2, MinIO
    S3 {
        /// Custom endpoint URL for S3-compatible stores. `None` for AWS.
        endpoint: Option<String>,
        /// Bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Bucket region.
        region: String,
    },
    /// Local filesystem (development and tests only)
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl LakeProvider {
    /// Create an S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: Option<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint,
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create a local filesystem provider (development and tests only).
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }

    /// Get the bucket name, or the root path for local providers.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
        }
    }
}
