//! Aggregate table rebuilds on top of `fact_expenses`.

use super::sink::WarehouseStore;

const MONTHLY_EXPENSE_SUMMARY: &str = r"
DROP TABLE IF EXISTS monthly_expense_summary;

CREATE TABLE monthly_expense_summary AS
SELECT
    organization_id,
    year,
    month,
    category,
    COUNT(*) AS expense_count,
    SUM(amount) AS total_amount,
    AVG(amount) AS avg_amount,
    MIN(amount) AS min_amount,
    MAX(amount) AS max_amount,
    COUNT(DISTINCT user_id) AS unique_users,
    COUNT(DISTINCT vendor) AS unique_vendors
FROM fact_expenses
GROUP BY organization_id, year, month, category;
";

const CATEGORY_PERFORMANCE: &str = r"
DROP TABLE IF EXISTS category_performance;

CREATE TABLE category_performance AS
SELECT
    organization_id,
    category,
    COUNT(*) AS total_expenses,
    SUM(amount) AS total_amount,
    AVG(amount) AS avg_amount,
    COUNT(DISTINCT user_id) AS unique_users,
    COUNT(DISTINCT vendor) AS unique_vendors,
    COUNT(*) FILTER (WHERE is_weekend) AS weekend_expenses,
    COUNT(*) FILTER (WHERE has_receipt) AS expenses_with_receipt
FROM fact_expenses
GROUP BY organization_id, category;
";

const USER_SPENDING_PATTERNS: &str = r"
DROP TABLE IF EXISTS user_spending_patterns;

CREATE TABLE user_spending_patterns AS
SELECT
    user_id,
    organization_id,
    COUNT(*) AS total_expenses,
    SUM(amount) AS total_amount,
    AVG(amount) AS avg_amount,
    COUNT(DISTINCT category) AS categories_used,
    COUNT(DISTINCT vendor) AS vendors_used,
    MIN(date) AS first_expense_date,
    MAX(date) AS last_expense_date,
    COUNT(*) FILTER (WHERE is_weekend) AS weekend_expenses
FROM fact_expenses
GROUP BY user_id, organization_id;
";

impl WarehouseStore {
    /// Rebuilds the three aggregate tables from `fact_expenses`.
    ///
    /// All three are dropped and recreated inside one transaction, so
    /// readers see either the previous set or the new set, never a mix.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement or the commit fails.
    pub async fn rebuild_aggregates(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::raw_sql(MONTHLY_EXPENSE_SUMMARY)
            .execute(&mut *tx)
            .await?;
        sqlx::raw_sql(CATEGORY_PERFORMANCE).execute(&mut *tx).await?;
        sqlx::raw_sql(USER_SPENDING_PATTERNS)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!("rebuilt aggregate tables");
        Ok(())
    }
}
