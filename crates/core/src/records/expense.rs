//! Expense rows: raw extraction shape and enriched fact shape.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::labels::{AmountBucket, ExpenseType, Season};

/// An expense row as extracted from the operational store.
///
/// The extraction query LEFT JOINs submitter and organization attributes,
/// so the denormalized fields are optional. `amount` is carried as raw text
/// and coerced during transform, so one malformed value degrades to null
/// instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    /// Expense ID.
    pub id: Uuid,
    /// Organization the expense belongs to.
    pub organization_id: Uuid,
    /// User who submitted the expense.
    pub user_id: Uuid,
    /// Free-text description.
    pub description: Option<String>,
    /// Amount as stored, prior to numeric coercion.
    pub amount: Option<String>,
    /// Currency code.
    pub currency: String,
    /// Expense category.
    pub category: Option<String>,
    /// Expense subcategory.
    pub subcategory: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Workflow status.
    pub status: String,
    /// Whether the expense is billable.
    pub billable: bool,
    /// Receipt URL, when one was attached.
    pub receipt_url: Option<String>,
    /// Free-form tags.
    pub tags: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Submitter first name (denormalized).
    pub first_name: Option<String>,
    /// Submitter last name (denormalized).
    pub last_name: Option<String>,
    /// Submitter email (denormalized).
    pub email: Option<String>,
    /// Organization name (denormalized).
    pub organization_name: Option<String>,
    /// Organization industry (denormalized).
    pub industry: Option<String>,
    /// Organization size bracket (denormalized).
    pub size: Option<String>,
}

/// An enriched expense row ready for the `fact_expenses` table.
///
/// Carries every raw field (with sentinels filled in for missing
/// category/vendor/description) plus the derived columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseFact {
    /// Expense ID.
    pub id: Uuid,
    /// Organization the expense belongs to.
    pub organization_id: Uuid,
    /// User who submitted the expense.
    pub user_id: Uuid,
    /// Description, `"No description"` when the source was null.
    pub description: String,
    /// Coerced numeric amount; null when missing or unparseable.
    pub amount: Option<Decimal>,
    /// Currency code.
    pub currency: String,
    /// Category, `"Uncategorized"` when the source was null.
    pub category: String,
    /// Expense subcategory.
    pub subcategory: Option<String>,
    /// Vendor, `"Unknown"` when the source was null.
    pub vendor: String,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Workflow status.
    pub status: String,
    /// Whether the expense is billable.
    pub billable: bool,
    /// Receipt URL, when one was attached.
    pub receipt_url: Option<String>,
    /// Free-form tags.
    pub tags: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Submitter first name (denormalized).
    pub first_name: Option<String>,
    /// Submitter last name (denormalized).
    pub last_name: Option<String>,
    /// Submitter email (denormalized).
    pub email: Option<String>,
    /// Organization name (denormalized).
    pub organization_name: Option<String>,
    /// Organization industry (denormalized).
    pub industry: Option<String>,
    /// Organization size bracket (denormalized).
    pub size: Option<String>,
    /// Calendar year of the expense date.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: i16,
    /// Calendar quarter (1-4).
    pub quarter: i16,
    /// Day of week, Monday = 0 through Sunday = 6.
    pub day_of_week: i16,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Last day of its month.
    pub is_month_end: bool,
    /// Last day of a calendar quarter.
    pub is_quarter_end: bool,
    /// December 31st.
    pub is_year_end: bool,
    /// Fixed amount bucket; null when the amount is null or negative.
    pub amount_bucket: Option<AmountBucket>,
    /// Three-tier size label; null when the amount is null.
    pub expense_type: Option<ExpenseType>,
    /// Season of the expense date.
    pub season: Season,
    /// Character count of the original description; null when it was missing.
    pub description_length: Option<i32>,
    /// Word count of the original description; null when it was missing.
    pub word_count: Option<i32>,
    /// Whether a receipt URL is present.
    pub has_receipt: bool,
    /// Lowercased, trimmed vendor; null when the vendor was missing.
    pub vendor_clean: Option<String>,
    /// Character count of the original vendor; null when it was missing.
    pub vendor_length: Option<i32>,
    /// Lowercased, trimmed category; null when the category was missing.
    pub category_standardized: Option<String>,
    /// Composite key `<organization_id>_<id>`.
    pub expense_key: String,
}
