//! Incremental-run checkpoint value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted marker of the last successful incremental run.
///
/// Serialized as a small JSON object with an ISO-8601 timestamp. The next
/// incremental run starts its window at `last_run_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtlCheckpoint {
    /// End bound of the last successful run.
    pub last_run_time: DateTime<Utc>,
    /// Expense rows processed by that run.
    pub processed_records: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_json_shape() {
        let checkpoint = EtlCheckpoint {
            last_run_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
            processed_records: 1250,
        };
        let json = serde_json::to_value(checkpoint).unwrap();
        assert_eq!(json["last_run_time"], "2024-05-01T08:30:00Z");
        assert_eq!(json["processed_records"], 1250);
    }

    #[test]
    fn test_round_trip() {
        let original = EtlCheckpoint {
            last_run_time: Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
            processed_records: 0,
        };
        let json = serde_json::to_string(&original).unwrap();
        let parsed: EtlCheckpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
