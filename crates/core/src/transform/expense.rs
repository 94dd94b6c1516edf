//! Expense enrichment: raw rows into warehouse facts.

use chrono::Datelike;

use crate::records::{ExpenseFact, ExpenseRecord};

use super::calendar::date_parts;
use super::classify::{amount_bucket, coerce_amount, expense_type, season_for_month};
use super::text::{char_length, standardize, word_count};

/// Sentinel stored when an expense has no category.
pub const MISSING_CATEGORY: &str = "Uncategorized";
/// Sentinel stored when an expense has no vendor.
pub const MISSING_VENDOR: &str = "Unknown";
/// Sentinel stored when an expense has no description.
pub const MISSING_DESCRIPTION: &str = "No description";

/// Enrich a batch of raw expense rows.
///
/// Pure and total: every input row yields exactly one fact, in input order.
/// Text metrics are computed from the original values before the missing
/// ones are sentinel-filled.
#[must_use]
pub fn transform_expenses(records: &[ExpenseRecord]) -> Vec<ExpenseFact> {
    records.iter().map(enrich).collect()
}

fn enrich(record: &ExpenseRecord) -> ExpenseFact {
    let parts = date_parts(record.date);
    let amount = coerce_amount(record.amount.as_deref());

    ExpenseFact {
        id: record.id,
        organization_id: record.organization_id,
        user_id: record.user_id,
        description: record
            .description
            .clone()
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        amount,
        currency: record.currency.clone(),
        category: record
            .category
            .clone()
            .unwrap_or_else(|| MISSING_CATEGORY.to_string()),
        subcategory: record.subcategory.clone(),
        vendor: record
            .vendor
            .clone()
            .unwrap_or_else(|| MISSING_VENDOR.to_string()),
        date: record.date,
        created_at: record.created_at,
        updated_at: record.updated_at,
        status: record.status.clone(),
        billable: record.billable,
        receipt_url: record.receipt_url.clone(),
        tags: record.tags.clone(),
        notes: record.notes.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        organization_name: record.organization_name.clone(),
        industry: record.industry.clone(),
        size: record.size.clone(),
        year: parts.year,
        month: parts.month,
        quarter: parts.quarter,
        day_of_week: parts.day_of_week,
        is_weekend: parts.is_weekend,
        is_month_end: parts.is_month_end,
        is_quarter_end: parts.is_quarter_end,
        is_year_end: parts.is_year_end,
        amount_bucket: amount.and_then(amount_bucket),
        expense_type: amount.map(expense_type),
        season: season_for_month(record.date.month()),
        description_length: record.description.as_deref().map(char_length),
        word_count: record.description.as_deref().map(word_count),
        has_receipt: record.receipt_url.is_some(),
        vendor_clean: record.vendor.as_deref().map(standardize),
        vendor_length: record.vendor.as_deref().map(char_length),
        category_standardized: record.category.as_deref().map(standardize),
        expense_key: format!("{}_{}", record.organization_id, record.id),
    }
}
