//! Read-only store over the operational source database.
//!
//! Extraction skips soft-deleted rows and denormalizes submitter and
//! organization attributes onto each expense so the transform never needs
//! a second lookup. Amounts are cast to text here; numeric coercion is a
//! transform concern.

use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use spendlake_core::records::{ExpenseRecord, OrganizationRecord, UserRecord};

const SELECT_EXPENSES: &str = r"
SELECT
    e.id,
    e.organization_id,
    e.user_id,
    e.description,
    e.amount::text AS amount,
    e.currency,
    e.category,
    e.subcategory,
    e.vendor,
    e.date,
    e.created_at,
    e.updated_at,
    e.status,
    e.billable,
    e.receipt_url,
    e.tags,
    e.notes,
    u.first_name,
    u.last_name,
    u.email,
    o.name AS organization_name,
    o.industry,
    o.size
FROM expenses e
LEFT JOIN users u ON e.user_id = u.id
LEFT JOIN organizations o ON e.organization_id = o.id
WHERE e.date BETWEEN $1 AND $2
  AND e.deleted_at IS NULL
ORDER BY e.date DESC
";

const SELECT_ORGANIZATIONS: &str = r"
SELECT
    id,
    name,
    industry,
    size,
    created_at,
    updated_at,
    status,
    subscription_plan,
    country,
    timezone
FROM organizations
WHERE deleted_at IS NULL
";

const SELECT_USERS: &str = r"
SELECT
    id,
    organization_id,
    first_name,
    last_name,
    email,
    role,
    created_at,
    updated_at,
    last_login_at,
    status
FROM users
WHERE deleted_at IS NULL
";

/// Read-only store for extraction queries.
#[derive(Debug, Clone)]
pub struct SourceStore {
    pool: PgPool,
}

impl SourceStore {
    /// Creates a new source store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches expenses whose date falls inside the closed interval
    /// `[start_date, end_date]`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row decoding fails.
    pub async fn fetch_expenses(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<ExpenseRecord>, sqlx::Error> {
        let rows = sqlx::query(SELECT_EXPENSES)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(expense_from_row).collect()
    }

    /// Fetches all live organizations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row decoding fails.
    pub async fn fetch_organizations(&self) -> Result<Vec<OrganizationRecord>, sqlx::Error> {
        let rows = sqlx::query(SELECT_ORGANIZATIONS)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(organization_from_row).collect()
    }

    /// Fetches all live users.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row decoding fails.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, sqlx::Error> {
        let rows = sqlx::query(SELECT_USERS).fetch_all(&self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }
}

fn expense_from_row(row: &PgRow) -> Result<ExpenseRecord, sqlx::Error> {
    Ok(ExpenseRecord {
        id: row.try_get("id")?,
        organization_id: row.try_get("organization_id")?,
        user_id: row.try_get("user_id")?,
        description: row.try_get("description")?,
        amount: row.try_get("amount")?,
        currency: row.try_get("currency")?,
        category: row.try_get("category")?,
        subcategory: row.try_get("subcategory")?,
        vendor: row.try_get("vendor")?,
        date: row.try_get("date")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        status: row.try_get("status")?,
        billable: row.try_get("billable")?,
        receipt_url: row.try_get("receipt_url")?,
        tags: row.try_get("tags")?,
        notes: row.try_get("notes")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        organization_name: row.try_get("organization_name")?,
        industry: row.try_get("industry")?,
        size: row.try_get("size")?,
    })
}

fn organization_from_row(row: &PgRow) -> Result<OrganizationRecord, sqlx::Error> {
    Ok(OrganizationRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        industry: row.try_get("industry")?,
        size: row.try_get("size")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        status: row.try_get("status")?,
        subscription_plan: row.try_get("subscription_plan")?,
        country: row.try_get("country")?,
        timezone: row.try_get("timezone")?,
    })
}

fn user_from_row(row: &PgRow) -> Result<UserRecord, sqlx::Error> {
    Ok(UserRecord {
        id: row.try_get("id")?,
        organization_id: row.try_get("organization_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        role: row.try_get("role")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        last_login_at: row.try_get("last_login_at")?,
        status: row.try_get("status")?,
    })
}
