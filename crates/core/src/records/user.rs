//! User rows: raw extraction shape and enriched dimension shape.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::labels::{ActivityLevel, RoleCategory};

/// A user row as extracted from the operational store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    /// User ID.
    pub id: Uuid,
    /// Organization the user belongs to.
    pub organization_id: Uuid,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Source role string.
    pub role: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Last login timestamp; null when the user never logged in.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account status.
    pub status: Option<String>,
}

/// An enriched user row ready for the `dim_users` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDim {
    /// User ID.
    pub id: Uuid,
    /// Organization the user belongs to.
    pub organization_id: Uuid,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Source role string.
    pub role: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Last login timestamp; null when the user never logged in.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Account status.
    pub status: Option<String>,
    /// Whole days between creation and the run's `now`.
    pub user_age_days: i64,
    /// Whole days since last login; null when the user never logged in.
    pub days_since_last_login: Option<i64>,
    /// Four-tier activity label.
    pub activity_level: ActivityLevel,
    /// Role remapped into the fixed display set.
    pub role_category: RoleCategory,
}
