//! Immutable result value describing one completed run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::window::DateWindow;

/// Summary of one successful ETL invocation.
///
/// The run coordinator returns this value instead of mutating long-lived
/// pipeline state, keeping runs composable and testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Window the run covered.
    pub window: DateWindow,
    /// Expense rows extracted.
    pub expenses_extracted: usize,
    /// Organization rows extracted.
    pub organizations_extracted: usize,
    /// User rows extracted.
    pub users_extracted: usize,
    /// Object-store key the raw snapshot was written under.
    pub snapshot_key: String,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}
