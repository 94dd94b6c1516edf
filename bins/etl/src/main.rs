//! Spendlake ETL runner.
//!
//! Extracts expenses, organizations, and users from the operational store,
//! loads the warehouse star schema, writes a raw Parquet snapshot to the
//! lake, and rebuilds the aggregate tables. Runs either over an explicit
//! date range or incrementally from the saved checkpoint.

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendlake_core::lake::{LakeProvider, LakeStore};
use spendlake_pipeline::{CheckpointStore, EtlRunner};
use spendlake_shared::EtlConfig;
use spendlake_shared::types::DateWindow;
use spendlake_warehouse::{SourceStore, WarehouseStore};

/// Expense ETL: operational Postgres to warehouse, lake, and aggregates.
#[derive(Parser)]
#[command(name = "spendlake", version)]
struct Cli {
    /// First day of the extraction window (YYYY-MM-DD)
    #[arg(
        long,
        required_unless_present = "incremental",
        conflicts_with = "incremental"
    )]
    start_date: Option<NaiveDate>,

    /// Last day of the extraction window (YYYY-MM-DD)
    #[arg(
        long,
        required_unless_present = "incremental",
        conflicts_with = "incremental"
    )]
    end_date: Option<NaiveDate>,

    /// Run from the saved checkpoint (or the trailing week on first run)
    #[arg(long)]
    incremental: bool,

    /// Configuration file to load (environment variables override it)
    #[arg(long, default_value = "config/etl.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "spendlake=info,spendlake_pipeline=info,spendlake_warehouse=info,spendlake_core=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = EtlConfig::load(&cli.config)?;

    // Connect to both databases
    let source_pool = spendlake_warehouse::connect(&config.source_database).await?;
    let warehouse_pool = spendlake_warehouse::connect(&config.data_warehouse).await?;
    info!("Connected to source and warehouse databases");

    let source = SourceStore::new(source_pool);
    let warehouse = WarehouseStore::new(warehouse_pool);

    // Object store for raw snapshots
    let provider = LakeProvider::s3(
        config.s3.endpoint.clone(),
        &config.s3.bucket,
        &config.s3.access_key_id,
        &config.s3.secret_access_key,
        &config.s3.region,
    );
    let lake = LakeStore::from_provider(&provider)?;
    info!(
        provider = provider.name(),
        bucket = provider.bucket(),
        "Lake store configured"
    );

    let checkpoints = CheckpointStore::new(config.checkpoint.path.clone());
    let runner = EtlRunner::new(source, warehouse, lake);

    let report = if cli.incremental {
        runner.run_incremental(&checkpoints).await?
    } else {
        let (Some(start_date), Some(end_date)) = (cli.start_date, cli.end_date) else {
            anyhow::bail!("provide --start-date and --end-date, or pass --incremental");
        };
        let window = DateWindow::new(
            start_date.and_time(NaiveTime::MIN).and_utc(),
            end_date.and_time(NaiveTime::MIN).and_utc(),
        )?;
        runner.run(window).await?
    };

    info!(
        expenses = report.expenses_extracted,
        organizations = report.organizations_extracted,
        users = report.users_extracted,
        snapshot_key = %report.snapshot_key,
        "ETL run complete"
    );

    Ok(())
}
