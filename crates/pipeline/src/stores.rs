//! Store adapters binding the pipeline seams to concrete backends.
//!
//! Each adapter delegates to the store's inherent methods and maps the
//! backend error into the pipeline error for its stage.

use chrono::NaiveDate;

use spendlake_core::lake::LakeStore;
use spendlake_core::records::{
    ExpenseFact, ExpenseRecord, OrganizationDim, OrganizationRecord, UserDim, UserRecord,
};
use spendlake_shared::{EtlError, EtlResult};
use spendlake_warehouse::{SourceStore, WarehouseStore};

use super::traits::{ExpenseSource, SnapshotSink, WarehouseSink};

#[async_trait::async_trait]
impl ExpenseSource for SourceStore {
    async fn fetch_expenses(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EtlResult<Vec<ExpenseRecord>> {
        self.fetch_expenses(start_date, end_date)
            .await
            .map_err(|e| EtlError::extract(e.to_string()))
    }

    async fn fetch_organizations(&self) -> EtlResult<Vec<OrganizationRecord>> {
        self.fetch_organizations()
            .await
            .map_err(|e| EtlError::extract(e.to_string()))
    }

    async fn fetch_users(&self) -> EtlResult<Vec<UserRecord>> {
        self.fetch_users()
            .await
            .map_err(|e| EtlError::extract(e.to_string()))
    }
}

#[async_trait::async_trait]
impl WarehouseSink for WarehouseStore {
    async fn replace_expense_facts(&self, facts: &[ExpenseFact]) -> EtlResult<()> {
        self.replace_expense_facts(facts)
            .await
            .map_err(|e| EtlError::load(e.to_string()))
    }

    async fn replace_organization_dims(&self, dims: &[OrganizationDim]) -> EtlResult<()> {
        self.replace_organization_dims(dims)
            .await
            .map_err(|e| EtlError::load(e.to_string()))
    }

    async fn replace_user_dims(&self, dims: &[UserDim]) -> EtlResult<()> {
        self.replace_user_dims(dims)
            .await
            .map_err(|e| EtlError::load(e.to_string()))
    }

    async fn rebuild_aggregates(&self) -> EtlResult<()> {
        self.rebuild_aggregates()
            .await
            .map_err(|e| EtlError::aggregate(e.to_string()))
    }
}

#[async_trait::async_trait]
impl SnapshotSink for LakeStore {
    async fn write_expense_snapshot(
        &self,
        rows: &[ExpenseRecord],
        snapshot_date: NaiveDate,
    ) -> EtlResult<String> {
        self.write_expense_snapshot(rows, snapshot_date)
            .await
            .map_err(|e| EtlError::snapshot(e.to_string()))
    }
}
