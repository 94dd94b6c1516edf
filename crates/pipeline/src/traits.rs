//! Seams between the run coordinator and its backing stores.

use chrono::NaiveDate;

use spendlake_core::records::{
    ExpenseFact, ExpenseRecord, OrganizationDim, OrganizationRecord, UserDim, UserRecord,
};
use spendlake_shared::EtlResult;

/// Source of raw records for a run.
#[async_trait::async_trait]
pub trait ExpenseSource {
    /// Fetch expenses dated inside the closed interval `[start_date, end_date]`.
    async fn fetch_expenses(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EtlResult<Vec<ExpenseRecord>>;

    /// Fetch all live organizations.
    async fn fetch_organizations(&self) -> EtlResult<Vec<OrganizationRecord>>;

    /// Fetch all live users.
    async fn fetch_users(&self) -> EtlResult<Vec<UserRecord>>;
}

/// Destination warehouse for transformed rows.
#[async_trait::async_trait]
pub trait WarehouseSink {
    /// Replace `fact_expenses` wholesale.
    async fn replace_expense_facts(&self, facts: &[ExpenseFact]) -> EtlResult<()>;

    /// Replace `dim_organizations` wholesale.
    async fn replace_organization_dims(&self, dims: &[OrganizationDim]) -> EtlResult<()>;

    /// Replace `dim_users` wholesale.
    async fn replace_user_dims(&self, dims: &[UserDim]) -> EtlResult<()>;

    /// Rebuild the aggregate tables from `fact_expenses`.
    async fn rebuild_aggregates(&self) -> EtlResult<()>;
}

/// Destination lake for raw expense snapshots.
#[async_trait::async_trait]
pub trait SnapshotSink {
    /// Write the raw extract for `snapshot_date`, returning the object key.
    async fn write_expense_snapshot(
        &self,
        rows: &[ExpenseRecord],
        snapshot_date: NaiveDate,
    ) -> EtlResult<String>;
}
