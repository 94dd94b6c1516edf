//! Organization rows: raw extraction shape and enriched dimension shape.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::labels::{IndustryCategory, SizeCategory};

/// An organization row as extracted from the operational store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRecord {
    /// Organization ID.
    pub id: Uuid,
    /// Organization name.
    pub name: String,
    /// Industry, as entered at signup.
    pub industry: Option<String>,
    /// Headcount bracket, as entered at signup.
    pub size: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Account status.
    pub status: Option<String>,
    /// Subscription plan.
    pub subscription_plan: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// IANA timezone name.
    pub timezone: Option<String>,
}

/// An enriched organization row ready for the `dim_organizations` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationDim {
    /// Organization ID.
    pub id: Uuid,
    /// Organization name.
    pub name: String,
    /// Industry, as entered at signup.
    pub industry: Option<String>,
    /// Headcount bracket, as entered at signup.
    pub size: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Account status.
    pub status: Option<String>,
    /// Subscription plan.
    pub subscription_plan: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// IANA timezone name.
    pub timezone: Option<String>,
    /// Whole days between creation and the run's `now`.
    pub organization_age_days: i64,
    /// Industry remapped into the fixed category set.
    pub industry_category: IndustryCategory,
    /// Size bracket remapped into Small/Medium/Large/Unknown.
    pub size_category: SizeCategory,
}
