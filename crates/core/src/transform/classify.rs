//! Pure classification functions over explicit scalar inputs.
//!
//! Each function takes the one or two scalars it classifies rather than a
//! whole row, so the policy tables can be unit-tested in isolation.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::records::labels::{
    ActivityLevel, AmountBucket, ExpenseType, IndustryCategory, RoleCategory, Season, SizeCategory,
};

/// Coerce a raw amount string to a decimal.
///
/// Missing or unparseable values yield `None`; they must degrade, never
/// abort the batch.
#[must_use]
pub fn coerce_amount(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| Decimal::from_str(s.trim()).ok())
}

/// Bucket an amount over the fixed breakpoints 0, 10, 50, 100, 500, 1000.
///
/// Intervals are left-inclusive/right-exclusive, so 10 lands in `10-50`.
/// Negative amounts fall outside every bucket.
#[must_use]
pub fn amount_bucket(amount: Decimal) -> Option<AmountBucket> {
    if amount < Decimal::ZERO {
        return None;
    }
    let bucket = if amount < Decimal::from(10) {
        AmountBucket::From0To10
    } else if amount < Decimal::from(50) {
        AmountBucket::From10To50
    } else if amount < Decimal::from(100) {
        AmountBucket::From50To100
    } else if amount < Decimal::from(500) {
        AmountBucket::From100To500
    } else if amount < Decimal::from(1000) {
        AmountBucket::From500To1000
    } else {
        AmountBucket::Over1000
    };
    Some(bucket)
}

/// Three-tier size label: below 50 Small, below 200 Medium, else Large.
#[must_use]
pub fn expense_type(amount: Decimal) -> ExpenseType {
    if amount < Decimal::from(50) {
        ExpenseType::Small
    } else if amount < Decimal::from(200) {
        ExpenseType::Medium
    } else {
        ExpenseType::Large
    }
}

/// Season for a calendar month (1-12).
#[must_use]
pub const fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        // December, January, February
        _ => Season::Winter,
    }
}

/// Remap a source industry into the fixed category set.
#[must_use]
pub fn industry_category(industry: Option<&str>) -> IndustryCategory {
    match industry {
        Some("Technology") => IndustryCategory::Tech,
        Some("Healthcare") => IndustryCategory::Healthcare,
        Some("Finance") => IndustryCategory::Finance,
        Some("Retail") => IndustryCategory::Retail,
        Some("Manufacturing") => IndustryCategory::Manufacturing,
        Some("Education") => IndustryCategory::Education,
        // "Other" and anything unmapped both land here
        _ => IndustryCategory::Other,
    }
}

/// Remap a source headcount bracket into Small/Medium/Large/Unknown.
#[must_use]
pub fn size_category(size: Option<&str>) -> SizeCategory {
    match size {
        Some("1-10" | "11-50") => SizeCategory::Small,
        Some("51-200" | "201-500") => SizeCategory::Medium,
        Some("501-1000" | "1000+") => SizeCategory::Large,
        _ => SizeCategory::Unknown,
    }
}

/// Four-tier activity label from days since last login.
///
/// Users who never logged in are Inactive.
#[must_use]
pub const fn activity_level(days_since_login: Option<i64>) -> ActivityLevel {
    match days_since_login {
        Some(days) if days <= 7 => ActivityLevel::VeryActive,
        Some(days) if days <= 30 => ActivityLevel::Active,
        Some(days) if days <= 90 => ActivityLevel::ModeratelyActive,
        _ => ActivityLevel::Inactive,
    }
}

/// Remap a source role into the fixed display set.
#[must_use]
pub fn role_category(role: Option<&str>) -> RoleCategory {
    match role {
        Some("admin") => RoleCategory::Administrator,
        Some("manager") => RoleCategory::Manager,
        Some("viewer") => RoleCategory::Viewer,
        // "user" and anything unmapped both land here
        _ => RoleCategory::User,
    }
}
