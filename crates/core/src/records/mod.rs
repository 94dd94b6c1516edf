//! Row types flowing through the pipeline.
//!
//! Each entity has two shapes: the raw record as extracted from the
//! operational store, and the enriched shape loaded into the warehouse.

pub mod expense;
pub mod labels;
pub mod organization;
pub mod user;

pub use expense::{ExpenseFact, ExpenseRecord};
pub use labels::{
    ActivityLevel, AmountBucket, ExpenseType, IndustryCategory, RoleCategory, Season, SizeCategory,
};
pub use organization::{OrganizationDim, OrganizationRecord};
pub use user::{UserDim, UserRecord};
