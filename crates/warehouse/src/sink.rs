//! Warehouse store with staged full-table replacement.
//!
//! Each load writes into a `<table>__staging` table and then promotes it
//! with a drop-and-rename inside one transaction, so readers observe the
//! previous table or the new one, never a half-loaded state. The tables
//! carry no constraints or indexes; they are regenerated wholesale every
//! run and named constraints would collide across staging cycles.

use sqlx::{PgPool, Postgres, QueryBuilder};

use spendlake_core::records::{ExpenseFact, OrganizationDim, UserDim};

pub(crate) const FACT_EXPENSES: &str = "fact_expenses";
const DIM_ORGANIZATIONS: &str = "dim_organizations";
const DIM_USERS: &str = "dim_users";

/// Rows per INSERT statement. 41 binds per fact row keeps a full chunk
/// well under the Postgres parameter limit of 65535.
const INSERT_CHUNK: usize = 1000;

const FACT_COLUMNS: &str = "id, organization_id, user_id, description, amount, currency, \
     category, subcategory, vendor, date, created_at, updated_at, status, billable, \
     receipt_url, tags, notes, first_name, last_name, email, organization_name, industry, \
     size, year, month, quarter, day_of_week, is_weekend, is_month_end, is_quarter_end, \
     is_year_end, amount_bucket, expense_type, season, description_length, word_count, \
     has_receipt, vendor_clean, vendor_length, category_standardized, expense_key";

const ORG_COLUMNS: &str = "id, name, industry, size, created_at, updated_at, status, \
     subscription_plan, country, timezone, organization_age_days, industry_category, \
     size_category";

const USER_COLUMNS: &str = "id, organization_id, first_name, last_name, email, role, \
     created_at, updated_at, last_login_at, status, user_age_days, days_since_last_login, \
     activity_level, role_category";

/// Warehouse store that replaces analytics tables wholesale.
#[derive(Debug, Clone)]
pub struct WarehouseStore {
    pub(crate) pool: PgPool,
}

impl WarehouseStore {
    /// Creates a new warehouse store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replaces `fact_expenses` with the given facts.
    ///
    /// # Errors
    ///
    /// Returns an error if staging, insertion, or promotion fails.
    pub async fn replace_expense_facts(&self, facts: &[ExpenseFact]) -> Result<(), sqlx::Error> {
        let staging = staging_table(FACT_EXPENSES);
        self.reset_staging(&staging, &fact_expenses_ddl(&staging))
            .await?;

        for chunk in facts.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new(format!("INSERT INTO {staging} ({FACT_COLUMNS}) "));
            builder.push_values(chunk, |mut b, fact| {
                b.push_bind(fact.id)
                    .push_bind(fact.organization_id)
                    .push_bind(fact.user_id)
                    .push_bind(&fact.description)
                    .push_bind(fact.amount)
                    .push_bind(&fact.currency)
                    .push_bind(&fact.category)
                    .push_bind(&fact.subcategory)
                    .push_bind(&fact.vendor)
                    .push_bind(fact.date)
                    .push_bind(fact.created_at)
                    .push_bind(fact.updated_at)
                    .push_bind(&fact.status)
                    .push_bind(fact.billable)
                    .push_bind(&fact.receipt_url)
                    .push_bind(&fact.tags)
                    .push_bind(&fact.notes)
                    .push_bind(&fact.first_name)
                    .push_bind(&fact.last_name)
                    .push_bind(&fact.email)
                    .push_bind(&fact.organization_name)
                    .push_bind(&fact.industry)
                    .push_bind(&fact.size)
                    .push_bind(fact.year)
                    .push_bind(fact.month)
                    .push_bind(fact.quarter)
                    .push_bind(fact.day_of_week)
                    .push_bind(fact.is_weekend)
                    .push_bind(fact.is_month_end)
                    .push_bind(fact.is_quarter_end)
                    .push_bind(fact.is_year_end)
                    .push_bind(fact.amount_bucket.map(|bucket| bucket.as_str()))
                    .push_bind(fact.expense_type.map(|kind| kind.as_str()))
                    .push_bind(fact.season.as_str())
                    .push_bind(fact.description_length)
                    .push_bind(fact.word_count)
                    .push_bind(fact.has_receipt)
                    .push_bind(&fact.vendor_clean)
                    .push_bind(fact.vendor_length)
                    .push_bind(&fact.category_standardized)
                    .push_bind(&fact.expense_key);
            });
            builder.build().execute(&self.pool).await?;
        }

        self.promote_staging(FACT_EXPENSES, &staging).await?;
        tracing::info!(
            table = FACT_EXPENSES,
            rows = facts.len(),
            "replaced warehouse table"
        );
        Ok(())
    }

    /// Replaces `dim_organizations` with the given dimension rows.
    ///
    /// # Errors
    ///
    /// Returns an error if staging, insertion, or promotion fails.
    pub async fn replace_organization_dims(
        &self,
        dims: &[OrganizationDim],
    ) -> Result<(), sqlx::Error> {
        let staging = staging_table(DIM_ORGANIZATIONS);
        self.reset_staging(&staging, &dim_organizations_ddl(&staging))
            .await?;

        for chunk in dims.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new(format!("INSERT INTO {staging} ({ORG_COLUMNS}) "));
            builder.push_values(chunk, |mut b, dim| {
                b.push_bind(dim.id)
                    .push_bind(&dim.name)
                    .push_bind(&dim.industry)
                    .push_bind(&dim.size)
                    .push_bind(dim.created_at)
                    .push_bind(dim.updated_at)
                    .push_bind(&dim.status)
                    .push_bind(&dim.subscription_plan)
                    .push_bind(&dim.country)
                    .push_bind(&dim.timezone)
                    .push_bind(dim.organization_age_days)
                    .push_bind(dim.industry_category.as_str())
                    .push_bind(dim.size_category.as_str());
            });
            builder.build().execute(&self.pool).await?;
        }

        self.promote_staging(DIM_ORGANIZATIONS, &staging).await?;
        tracing::info!(
            table = DIM_ORGANIZATIONS,
            rows = dims.len(),
            "replaced warehouse table"
        );
        Ok(())
    }

    /// Replaces `dim_users` with the given dimension rows.
    ///
    /// # Errors
    ///
    /// Returns an error if staging, insertion, or promotion fails.
    pub async fn replace_user_dims(&self, dims: &[UserDim]) -> Result<(), sqlx::Error> {
        let staging = staging_table(DIM_USERS);
        self.reset_staging(&staging, &dim_users_ddl(&staging))
            .await?;

        for chunk in dims.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new(format!("INSERT INTO {staging} ({USER_COLUMNS}) "));
            builder.push_values(chunk, |mut b, dim| {
                b.push_bind(dim.id)
                    .push_bind(dim.organization_id)
                    .push_bind(&dim.first_name)
                    .push_bind(&dim.last_name)
                    .push_bind(&dim.email)
                    .push_bind(&dim.role)
                    .push_bind(dim.created_at)
                    .push_bind(dim.updated_at)
                    .push_bind(dim.last_login_at)
                    .push_bind(&dim.status)
                    .push_bind(dim.user_age_days)
                    .push_bind(dim.days_since_last_login)
                    .push_bind(dim.activity_level.as_str())
                    .push_bind(dim.role_category.as_str());
            });
            builder.build().execute(&self.pool).await?;
        }

        self.promote_staging(DIM_USERS, &staging).await?;
        tracing::info!(
            table = DIM_USERS,
            rows = dims.len(),
            "replaced warehouse table"
        );
        Ok(())
    }

    /// Drop any leftover staging table and create a fresh empty one.
    async fn reset_staging(&self, staging: &str, ddl: &str) -> Result<(), sqlx::Error> {
        let drop_sql = format!("DROP TABLE IF EXISTS {staging}");
        sqlx::raw_sql(&drop_sql).execute(&self.pool).await?;
        sqlx::raw_sql(ddl).execute(&self.pool).await?;
        Ok(())
    }

    /// Swap the staging table into place of the live one.
    async fn promote_staging(&self, table: &str, staging: &str) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let drop_sql = format!("DROP TABLE IF EXISTS {table}");
        sqlx::raw_sql(&drop_sql).execute(&mut *tx).await?;
        let rename_sql = format!("ALTER TABLE {staging} RENAME TO {table}");
        sqlx::raw_sql(&rename_sql).execute(&mut *tx).await?;
        tx.commit().await
    }
}

fn staging_table(table: &str) -> String {
    format!("{table}__staging")
}

fn fact_expenses_ddl(table: &str) -> String {
    format!(
        "CREATE TABLE {table} (
    id UUID NOT NULL,
    organization_id UUID NOT NULL,
    user_id UUID NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC,
    currency TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT,
    vendor TEXT NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    status TEXT NOT NULL,
    billable BOOLEAN NOT NULL,
    receipt_url TEXT,
    tags TEXT,
    notes TEXT,
    first_name TEXT,
    last_name TEXT,
    email TEXT,
    organization_name TEXT,
    industry TEXT,
    size TEXT,
    year INT NOT NULL,
    month SMALLINT NOT NULL,
    quarter SMALLINT NOT NULL,
    day_of_week SMALLINT NOT NULL,
    is_weekend BOOLEAN NOT NULL,
    is_month_end BOOLEAN NOT NULL,
    is_quarter_end BOOLEAN NOT NULL,
    is_year_end BOOLEAN NOT NULL,
    amount_bucket TEXT,
    expense_type TEXT,
    season TEXT NOT NULL,
    description_length INT,
    word_count INT,
    has_receipt BOOLEAN NOT NULL,
    vendor_clean TEXT,
    vendor_length INT,
    category_standardized TEXT,
    expense_key TEXT NOT NULL
)"
    )
}

fn dim_organizations_ddl(table: &str) -> String {
    format!(
        "CREATE TABLE {table} (
    id UUID NOT NULL,
    name TEXT NOT NULL,
    industry TEXT,
    size TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    status TEXT,
    subscription_plan TEXT,
    country TEXT,
    timezone TEXT,
    organization_age_days BIGINT NOT NULL,
    industry_category TEXT NOT NULL,
    size_category TEXT NOT NULL
)"
    )
}

fn dim_users_ddl(table: &str) -> String {
    format!(
        "CREATE TABLE {table} (
    id UUID NOT NULL,
    organization_id UUID NOT NULL,
    first_name TEXT,
    last_name TEXT,
    email TEXT NOT NULL,
    role TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    last_login_at TIMESTAMPTZ,
    status TEXT,
    user_age_days BIGINT NOT NULL,
    days_since_last_login BIGINT,
    activity_level TEXT NOT NULL,
    role_category TEXT NOT NULL
)"
    )
}
