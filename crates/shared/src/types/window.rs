//! Run window covering a closed date interval.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::error::EtlError;

/// Interval of time an ETL run covers.
///
/// Extraction filters expenses to the window's calendar dates (closed on
/// both ends); the raw snapshot key is derived from the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    /// Create a window, validating that `start` is not after `end`.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::InvalidWindow`] when `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, EtlError> {
        if start > end {
            return Err(EtlError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window spanning the `days` days ending at `end`.
    #[must_use]
    pub fn trailing_days(days: i64, end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Calendar date of the window start.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the window end.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}
