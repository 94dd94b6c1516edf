//! Organization enrichment: raw rows into dimension rows.

use chrono::{DateTime, Utc};

use crate::records::{OrganizationDim, OrganizationRecord};

use super::classify::{industry_category, size_category};

/// Enrich a batch of raw organization rows.
///
/// `now` anchors the age calculation so a run stays deterministic.
#[must_use]
pub fn transform_organizations(
    records: &[OrganizationRecord],
    now: DateTime<Utc>,
) -> Vec<OrganizationDim> {
    records.iter().map(|record| enrich(record, now)).collect()
}

fn enrich(record: &OrganizationRecord, now: DateTime<Utc>) -> OrganizationDim {
    OrganizationDim {
        id: record.id,
        name: record.name.clone(),
        industry: record.industry.clone(),
        size: record.size.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
        status: record.status.clone(),
        subscription_plan: record.subscription_plan.clone(),
        country: record.country.clone(),
        timezone: record.timezone.clone(),
        organization_age_days: (now - record.created_at).num_days(),
        industry_category: industry_category(record.industry.as_deref()),
        size_category: size_category(record.size.as_deref()),
    }
}
