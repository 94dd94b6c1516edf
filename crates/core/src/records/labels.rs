//! Categorical labels attached to enriched rows.
//!
//! The string forms are part of the warehouse contract: aggregate consumers
//! group by them, so `as_str` must keep returning the exact labels below.

use serde::Serialize;

/// Fixed amount bucket an expense falls into.
///
/// Buckets are left-inclusive/right-exclusive over the breakpoints
/// 0, 10, 50, 100, 500, 1000, so an amount of exactly 10 lands in `10-50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AmountBucket {
    /// [0, 10)
    #[serde(rename = "0-10")]
    From0To10,
    /// [10, 50)
    #[serde(rename = "10-50")]
    From10To50,
    /// [50, 100)
    #[serde(rename = "50-100")]
    From50To100,
    /// [100, 500)
    #[serde(rename = "100-500")]
    From100To500,
    /// [500, 1000)
    #[serde(rename = "500-1000")]
    From500To1000,
    /// [1000, ∞)
    #[serde(rename = "1000+")]
    Over1000,
}

impl AmountBucket {
    /// Returns the warehouse label for this bucket.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From0To10 => "0-10",
            Self::From10To50 => "10-50",
            Self::From50To100 => "50-100",
            Self::From100To500 => "100-500",
            Self::From500To1000 => "500-1000",
            Self::Over1000 => "1000+",
        }
    }
}

/// Three-tier expense size label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpenseType {
    /// Amount below 50.
    #[serde(rename = "Small Expense")]
    Small,
    /// Amount in [50, 200).
    #[serde(rename = "Medium Expense")]
    Medium,
    /// Amount of 200 or more.
    #[serde(rename = "Large Expense")]
    Large,
}

impl ExpenseType {
    /// Returns the warehouse label for this expense type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small Expense",
            Self::Medium => "Medium Expense",
            Self::Large => "Large Expense",
        }
    }
}

/// Season derived from the expense month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    /// December, January, February.
    Winter,
    /// March, April, May.
    Spring,
    /// June, July, August.
    Summer,
    /// September, October, November.
    Fall,
}

impl Season {
    /// Returns the warehouse label for this season.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }
}

/// Industry category an organization is remapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndustryCategory {
    /// Technology companies.
    Tech,
    /// Healthcare providers.
    Healthcare,
    /// Financial services.
    Finance,
    /// Retail businesses.
    Retail,
    /// Manufacturing companies.
    Manufacturing,
    /// Education institutions.
    Education,
    /// Catch-all for unmapped or missing industries.
    Other,
}

impl IndustryCategory {
    /// Returns the warehouse label for this industry category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Retail => "Retail",
            Self::Manufacturing => "Manufacturing",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

/// Headcount-bracket category an organization is remapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeCategory {
    /// Brackets 1-10 and 11-50.
    Small,
    /// Brackets 51-200 and 201-500.
    Medium,
    /// Brackets 501-1000 and 1000+.
    Large,
    /// Catch-all for unmapped or missing brackets.
    Unknown,
}

impl SizeCategory {
    /// Returns the warehouse label for this size category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Unknown => "Unknown",
        }
    }
}

/// Four-tier user activity label from days since last login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    /// Logged in within the last 7 days.
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Logged in within the last 30 days.
    Active,
    /// Logged in within the last 90 days.
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    /// Longer ago, or never logged in.
    Inactive,
}

impl ActivityLevel {
    /// Returns the warehouse label for this activity level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryActive => "Very Active",
            Self::Active => "Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Display role a user is remapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleCategory {
    /// Source role `admin`.
    Administrator,
    /// Source role `manager`.
    Manager,
    /// Source role `user`, plus anything unmapped or missing.
    User,
    /// Source role `viewer`.
    Viewer,
}

impl RoleCategory {
    /// Returns the warehouse label for this role category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Manager => "Manager",
            Self::User => "User",
            Self::Viewer => "Viewer",
        }
    }
}
