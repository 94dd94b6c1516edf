//! Pure enrichment of raw rows into warehouse-ready facts and dimensions.
//!
//! Everything here is deterministic given the rows and an explicit `now`;
//! no I/O, no clock reads.

pub mod calendar;
pub mod classify;
pub mod expense;
pub mod organization;
pub mod text;
pub mod user;


pub use expense::{MISSING_CATEGORY, MISSING_DESCRIPTION, MISSING_VENDOR, transform_expenses};
pub use organization::transform_organizations;
pub use user::transform_users;
