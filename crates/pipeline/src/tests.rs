//! Fake-backed tests for the run coordinator and checkpoint flow.

use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use spendlake_core::lake::snapshot_key;
use spendlake_core::records::{
    ExpenseFact, ExpenseRecord, OrganizationDim, OrganizationRecord, UserDim, UserRecord,
};
use spendlake_shared::types::{DateWindow, EtlCheckpoint};
use spendlake_shared::{EtlError, EtlResult};

use super::checkpoint::CheckpointStore;
use super::runner::EtlRunner;
use super::traits::{ExpenseSource, SnapshotSink, WarehouseSink};

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    fn record(&self, call: &'static str) {
        self.0.lock().expect("log lock").push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.0.lock().expect("log lock").clone()
    }
}

struct FakeSource {
    log: CallLog,
    expenses: Vec<ExpenseRecord>,
    organizations: Vec<OrganizationRecord>,
    users: Vec<UserRecord>,
    fail_expenses: bool,
}

#[async_trait::async_trait]
impl ExpenseSource for FakeSource {
    async fn fetch_expenses(
        &self,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> EtlResult<Vec<ExpenseRecord>> {
        self.log.record("fetch_expenses");
        if self.fail_expenses {
            return Err(EtlError::extract("source connection reset"));
        }
        Ok(self.expenses.clone())
    }

    async fn fetch_organizations(&self) -> EtlResult<Vec<OrganizationRecord>> {
        self.log.record("fetch_organizations");
        Ok(self.organizations.clone())
    }

    async fn fetch_users(&self) -> EtlResult<Vec<UserRecord>> {
        self.log.record("fetch_users");
        Ok(self.users.clone())
    }
}

struct FakeWarehouse {
    log: CallLog,
    facts_seen: Arc<Mutex<usize>>,
    fail_facts: bool,
    fail_aggregates: bool,
}

#[async_trait::async_trait]
impl WarehouseSink for FakeWarehouse {
    async fn replace_expense_facts(&self, facts: &[ExpenseFact]) -> EtlResult<()> {
        self.log.record("replace_expense_facts");
        if self.fail_facts {
            return Err(EtlError::load("warehouse unavailable"));
        }
        *self.facts_seen.lock().expect("facts lock") = facts.len();
        Ok(())
    }

    async fn replace_organization_dims(&self, _dims: &[OrganizationDim]) -> EtlResult<()> {
        self.log.record("replace_organization_dims");
        Ok(())
    }

    async fn replace_user_dims(&self, _dims: &[UserDim]) -> EtlResult<()> {
        self.log.record("replace_user_dims");
        Ok(())
    }

    async fn rebuild_aggregates(&self) -> EtlResult<()> {
        self.log.record("rebuild_aggregates");
        if self.fail_aggregates {
            return Err(EtlError::aggregate("aggregate rebuild deadlocked"));
        }
        Ok(())
    }
}

struct FakeLake {
    log: CallLog,
}

#[async_trait::async_trait]
impl SnapshotSink for FakeLake {
    async fn write_expense_snapshot(
        &self,
        _rows: &[ExpenseRecord],
        snapshot_date: NaiveDate,
    ) -> EtlResult<String> {
        self.log.record("write_expense_snapshot");
        Ok(snapshot_key(snapshot_date))
    }
}

fn expense(seq: u128) -> ExpenseRecord {
    ExpenseRecord {
        id: Uuid::from_u128(seq),
        organization_id: Uuid::from_u128(100),
        user_id: Uuid::from_u128(200),
        description: Some("Team lunch".to_string()),
        amount: Some("42.50".to_string()),
        currency: "USD".to_string(),
        category: Some("Meals".to_string()),
        subcategory: None,
        vendor: Some("Harbor Grill".to_string()),
        date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 14, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 14, 12, 0, 0).unwrap(),
        status: "approved".to_string(),
        billable: false,
        receipt_url: None,
        tags: None,
        notes: None,
        first_name: Some("Ada".to_string()),
        last_name: Some("Park".to_string()),
        email: Some("ada@example.com".to_string()),
        organization_name: Some("Acme".to_string()),
        industry: Some("Technology".to_string()),
        size: Some("11-50".to_string()),
    }
}

fn organization() -> OrganizationRecord {
    OrganizationRecord {
        id: Uuid::from_u128(100),
        name: "Acme".to_string(),
        industry: Some("Technology".to_string()),
        size: Some("11-50".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        status: Some("active".to_string()),
        subscription_plan: Some("growth".to_string()),
        country: Some("US".to_string()),
        timezone: Some("America/New_York".to_string()),
    }
}

fn user(seq: u128) -> UserRecord {
    UserRecord {
        id: Uuid::from_u128(200 + seq),
        organization_id: Uuid::from_u128(100),
        first_name: Some("Ada".to_string()),
        last_name: Some("Park".to_string()),
        email: format!("user{seq}@example.com"),
        role: Some("manager".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        last_login_at: Some(Utc.with_ymd_and_hms(2024, 6, 10, 7, 0, 0).unwrap()),
        status: Some("active".to_string()),
    }
}

#[derive(Default)]
struct FakeFailures {
    expenses: bool,
    facts: bool,
    aggregates: bool,
}

fn runner_with(
    expense_count: u128,
    failures: FakeFailures,
) -> (
    CallLog,
    Arc<Mutex<usize>>,
    EtlRunner<FakeSource, FakeWarehouse, FakeLake>,
) {
    let log = CallLog::default();
    let facts_seen = Arc::new(Mutex::new(0));

    let source = FakeSource {
        log: log.clone(),
        expenses: (0..expense_count).map(expense).collect(),
        organizations: vec![organization()],
        users: vec![user(1), user(2)],
        fail_expenses: failures.expenses,
    };
    let warehouse = FakeWarehouse {
        log: log.clone(),
        facts_seen: facts_seen.clone(),
        fail_facts: failures.facts,
        fail_aggregates: failures.aggregates,
    };
    let lake = FakeLake { log: log.clone() };

    (log, facts_seen, EtlRunner::new(source, warehouse, lake))
}

fn june_window() -> DateWindow {
    DateWindow::new(
        Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap(),
    )
    .expect("valid window")
}

#[tokio::test]
async fn run_executes_stages_in_order() {
    let (log, facts_seen, runner) = runner_with(3, FakeFailures::default());

    let report = runner.run(june_window()).await.expect("run should succeed");

    assert_eq!(
        log.calls(),
        vec![
            "fetch_expenses",
            "fetch_organizations",
            "fetch_users",
            "replace_expense_facts",
            "replace_organization_dims",
            "replace_user_dims",
            "write_expense_snapshot",
            "rebuild_aggregates",
        ]
    );
    assert_eq!(report.expenses_extracted, 3);
    assert_eq!(report.organizations_extracted, 1);
    assert_eq!(report.users_extracted, 2);
    assert_eq!(*facts_seen.lock().expect("facts lock"), 3);
}

#[tokio::test]
async fn snapshot_key_comes_from_the_window_start() {
    let (_, _, runner) = runner_with(1, FakeFailures::default());

    let report = runner.run(june_window()).await.expect("run should succeed");

    assert_eq!(
        report.snapshot_key,
        "expenses/raw/2024/06/10/expenses_20240610.parquet"
    );
}

#[tokio::test]
async fn failed_extraction_stops_the_run() {
    let (log, _, runner) = runner_with(
        3,
        FakeFailures {
            expenses: true,
            ..Default::default()
        },
    );

    let err = runner.run(june_window()).await.expect_err("should fail");

    assert_eq!(err.stage(), "extract");
    assert_eq!(log.calls(), vec!["fetch_expenses"]);
}

#[tokio::test]
async fn failed_warehouse_load_skips_snapshot_and_aggregates() {
    let (log, _, runner) = runner_with(
        3,
        FakeFailures {
            facts: true,
            ..Default::default()
        },
    );

    let err = runner.run(june_window()).await.expect_err("should fail");

    assert_eq!(err.stage(), "load");
    let calls = log.calls();
    assert_eq!(calls.last(), Some(&"replace_expense_facts"));
    assert!(!calls.contains(&"write_expense_snapshot"));
    assert!(!calls.contains(&"rebuild_aggregates"));
}

#[tokio::test]
async fn aggregate_failure_surfaces_after_the_snapshot() {
    let (log, _, runner) = runner_with(
        1,
        FakeFailures {
            aggregates: true,
            ..Default::default()
        },
    );

    let err = runner.run(june_window()).await.expect_err("should fail");

    assert_eq!(err.stage(), "aggregate");
    assert!(log.calls().contains(&"write_expense_snapshot"));
}

#[tokio::test]
async fn incremental_defaults_to_a_trailing_week() {
    let dir = tempfile::tempdir().expect("tempdir");
    let checkpoints = CheckpointStore::new(dir.path().join("etl_state.json"));
    let (_, _, runner) = runner_with(2, FakeFailures::default());

    let report = runner
        .run_incremental(&checkpoints)
        .await
        .expect("run should succeed");

    assert_eq!(
        report.window.end() - report.window.start(),
        Duration::days(7)
    );

    let saved = checkpoints.load().expect("load").expect("present");
    assert_eq!(saved.last_run_time, report.window.end());
    assert_eq!(saved.processed_records, 2);
}

#[tokio::test]
async fn incremental_resumes_from_the_checkpoint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let checkpoints = CheckpointStore::new(dir.path().join("etl_state.json"));
    let last_run = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
    checkpoints
        .save(&EtlCheckpoint {
            last_run_time: last_run,
            processed_records: 10,
        })
        .expect("seed checkpoint");

    let (_, _, runner) = runner_with(1, FakeFailures::default());
    let report = runner
        .run_incremental(&checkpoints)
        .await
        .expect("run should succeed");

    assert_eq!(report.window.start(), last_run);
    assert!(report.window.end() > last_run);
}

#[tokio::test]
async fn failed_incremental_run_keeps_the_old_checkpoint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let checkpoints = CheckpointStore::new(dir.path().join("etl_state.json"));
    let seeded = EtlCheckpoint {
        last_run_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
        processed_records: 10,
    };
    checkpoints.save(&seeded).expect("seed checkpoint");

    let (_, _, runner) = runner_with(
        1,
        FakeFailures {
            facts: true,
            ..Default::default()
        },
    );
    runner
        .run_incremental(&checkpoints)
        .await
        .expect_err("should fail");

    let loaded = checkpoints.load().expect("load").expect("present");
    assert_eq!(loaded, seeded);
}

#[tokio::test]
async fn corrupt_checkpoint_aborts_before_extraction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("etl_state.json");
    std::fs::write(&path, "{oops").expect("write garbage");
    let checkpoints = CheckpointStore::new(path);

    let (log, _, runner) = runner_with(1, FakeFailures::default());
    let err = runner
        .run_incremental(&checkpoints)
        .await
        .expect_err("should fail");

    assert_eq!(err.stage(), "checkpoint");
    assert!(log.calls().is_empty());
}
