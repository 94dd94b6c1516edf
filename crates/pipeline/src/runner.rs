//! The run coordinator: extract, transform, load, snapshot, aggregate.

use chrono::Utc;

use spendlake_core::transform::{transform_expenses, transform_organizations, transform_users};
use spendlake_shared::EtlResult;
use spendlake_shared::types::{DateWindow, EtlCheckpoint, RunReport};

use super::checkpoint::CheckpointStore;
use super::traits::{ExpenseSource, SnapshotSink, WarehouseSink};

/// Days covered by an incremental run when no checkpoint exists.
const DEFAULT_INCREMENTAL_DAYS: i64 = 7;

/// Coordinates one run across source, warehouse, and lake.
pub struct EtlRunner<S, W, L> {
    source: S,
    warehouse: W,
    lake: L,
}

impl<S, W, L> EtlRunner<S, W, L>
where
    S: ExpenseSource,
    W: WarehouseSink,
    L: SnapshotSink,
{
    /// Creates a runner over the given stores.
    pub const fn new(source: S, warehouse: W, lake: L) -> Self {
        Self {
            source,
            warehouse,
            lake,
        }
    }

    /// Runs the full pipeline for the given window.
    ///
    /// Stages run in a fixed order: extract, transform, warehouse load,
    /// raw lake snapshot, aggregate rebuild. The first failing stage
    /// aborts the run; later stages are not attempted.
    ///
    /// # Errors
    ///
    /// Returns the failing stage's error untouched, so callers can tell
    /// extract failures from load or snapshot failures.
    pub async fn run(&self, window: DateWindow) -> EtlResult<RunReport> {
        tracing::info!(start = %window.start(), end = %window.end(), "starting pipeline run");

        let expenses = self
            .source
            .fetch_expenses(window.start_date(), window.end_date())
            .await?;
        let organizations = self.source.fetch_organizations().await?;
        let users = self.source.fetch_users().await?;
        tracing::info!(
            expenses = expenses.len(),
            organizations = organizations.len(),
            users = users.len(),
            "extracted source rows"
        );

        let now = Utc::now();
        let facts = transform_expenses(&expenses);
        let organization_dims = transform_organizations(&organizations, now);
        let user_dims = transform_users(&users, now);

        self.warehouse.replace_expense_facts(&facts).await?;
        self.warehouse
            .replace_organization_dims(&organization_dims)
            .await?;
        self.warehouse.replace_user_dims(&user_dims).await?;

        let snapshot_key = self
            .lake
            .write_expense_snapshot(&expenses, window.start_date())
            .await?;
        tracing::info!(key = %snapshot_key, "wrote raw snapshot");

        self.warehouse.rebuild_aggregates().await?;

        let report = RunReport {
            window,
            expenses_extracted: expenses.len(),
            organizations_extracted: organizations.len(),
            users_extracted: users.len(),
            snapshot_key,
            completed_at: Utc::now(),
        };
        tracing::info!(processed = report.expenses_extracted, "pipeline run completed");
        Ok(report)
    }

    /// Runs an incremental window and advances the checkpoint.
    ///
    /// The window starts at the last checkpoint, or
    /// [`DEFAULT_INCREMENTAL_DAYS`] back when none exists, and ends at
    /// the moment this call started. The checkpoint is written only
    /// after the run succeeds, so a failed run is retried over the same
    /// window next time.
    ///
    /// # Errors
    ///
    /// Returns the run's error, a checkpoint read/write error, or
    /// [`spendlake_shared::EtlError::InvalidWindow`] when the stored
    /// checkpoint lies in the future.
    pub async fn run_incremental(&self, checkpoints: &CheckpointStore) -> EtlResult<RunReport> {
        let now = Utc::now();
        let window = match checkpoints.load()? {
            Some(checkpoint) => DateWindow::new(checkpoint.last_run_time, now)?,
            None => {
                tracing::info!(
                    days = DEFAULT_INCREMENTAL_DAYS,
                    "no checkpoint found, using trailing window"
                );
                DateWindow::trailing_days(DEFAULT_INCREMENTAL_DAYS, now)
            }
        };

        let report = self.run(window).await?;

        checkpoints.save(&EtlCheckpoint {
            last_run_time: now,
            processed_records: u64::try_from(report.expenses_extracted).unwrap_or(u64::MAX),
        })?;

        Ok(report)
    }
}
