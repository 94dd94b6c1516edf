//! User enrichment: raw rows into dimension rows.

use chrono::{DateTime, Utc};

use crate::records::{UserDim, UserRecord};

use super::classify::{activity_level, role_category};

/// Enrich a batch of raw user rows.
///
/// `now` anchors the age and recency calculations so a run stays
/// deterministic.
#[must_use]
pub fn transform_users(records: &[UserRecord], now: DateTime<Utc>) -> Vec<UserDim> {
    records.iter().map(|record| enrich(record, now)).collect()
}

fn enrich(record: &UserRecord, now: DateTime<Utc>) -> UserDim {
    let days_since_last_login = record.last_login_at.map(|at| (now - at).num_days());

    UserDim {
        id: record.id,
        organization_id: record.organization_id,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        role: record.role.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
        last_login_at: record.last_login_at,
        status: record.status.clone(),
        user_age_days: (now - record.created_at).num_days(),
        days_since_last_login,
        activity_level: activity_level(days_since_last_login),
        role_category: role_category(record.role.as_deref()),
    }
}
