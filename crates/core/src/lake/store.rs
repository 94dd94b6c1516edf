//! Lake store implementation using Apache OpenDAL.

use chrono::NaiveDate;
use opendal::{ErrorKind, Operator, services};

use super::config::LakeProvider;
use super::error::LakeError;
use super::snapshot::encode_expenses;
use crate::records::ExpenseRecord;

/// Object store for raw expense snapshots.
pub struct LakeStore {
    operator: Operator,
}

impl LakeStore {
    /// Create a new lake store from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the lake provider cannot be initialized.
    pub fn from_provider(provider: &LakeProvider) -> Result<Self, LakeError> {
        let operator = Self::create_operator(provider)?;
        Ok(Self { operator })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &LakeProvider) -> Result<Operator, LakeError> {
        match provider {
            LakeProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let mut builder = services::S3::default()
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);
                if let Some(endpoint) = endpoint {
                    builder = builder.endpoint(endpoint);
                }

                Operator::new(builder)
                    .map_err(|e| LakeError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
            LakeProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| LakeError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| LakeError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
        }
    }

    /// Write a Parquet snapshot of raw expenses and return its key.
    ///
    /// The key is derived from `snapshot_date`, so re-running a window
    /// overwrites that date's snapshot instead of accumulating copies.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the object write fails.
    pub async fn write_expense_snapshot(
        &self,
        rows: &[ExpenseRecord],
        snapshot_date: NaiveDate,
    ) -> Result<String, LakeError> {
        let key = snapshot_key(snapshot_date);
        let buffer = encode_expenses(rows)?;
        self.operator.write(&key, buffer).await?;
        Ok(key)
    }

    /// Check if a snapshot exists at the given key.
    pub async fn snapshot_exists(&self, key: &str) -> bool {
        match self.operator.stat(key).await {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(_) => false,
        }
    }
}

/// Object key for the raw expense snapshot of a given date.
///
/// Format: `expenses/raw/{YYYY}/{MM}/{DD}/expenses_{YYYYMMDD}.parquet`
#[must_use]
pub fn snapshot_key(date: NaiveDate) -> String {
    format!(
        "expenses/raw/{}/expenses_{}.parquet",
        date.format("%Y/%m/%d"),
        date.format("%Y%m%d")
    )
}

/// Extension trait for pipe operator.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
