//! Incremental-run checkpoint persistence.

use std::fs;
use std::path::{Path, PathBuf};

use spendlake_shared::types::EtlCheckpoint;
use spendlake_shared::{EtlError, EtlResult};

/// File-backed checkpoint store.
///
/// The checkpoint records when the last successful run ended and how many
/// expenses it processed. A missing file means no run has completed yet;
/// a malformed file is an error rather than a silent full-window rerun.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    /// Creates a checkpoint store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the checkpoint, or `None` when no run has completed yet.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Checkpoint`] if the file exists but cannot be
    /// read or parsed.
    pub fn load(&self) -> EtlResult<Option<EtlCheckpoint>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| EtlError::checkpoint(format!("read {}: {e}", self.path.display())))?;
        let checkpoint = serde_json::from_str(&contents)
            .map_err(|e| EtlError::checkpoint(format!("parse {}: {e}", self.path.display())))?;
        Ok(Some(checkpoint))
    }

    /// Saves the checkpoint, replacing any previous one atomically.
    ///
    /// The value is written to a sibling temp file first and renamed into
    /// place, so a crash mid-write never leaves a truncated checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EtlError::Checkpoint`] if serialization or the file
    /// write fails.
    pub fn save(&self, checkpoint: &EtlCheckpoint) -> EtlResult<()> {
        let contents = serde_json::to_string_pretty(checkpoint)
            .map_err(|e| EtlError::checkpoint(format!("serialize checkpoint: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| EtlError::checkpoint(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| EtlError::checkpoint(format!("replace {}: {e}", self.path.display())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn load_returns_none_when_file_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CheckpointStore::new(dir.path().join("etl_state.json"));
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CheckpointStore::new(dir.path().join("etl_state.json"));

        let checkpoint = EtlCheckpoint {
            last_run_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
            processed_records: 1250,
        };
        store.save(&checkpoint).expect("save");

        let loaded = store.load().expect("load").expect("present");
        assert_eq!(loaded, checkpoint);
    }

    #[test]
    fn save_replaces_previous_checkpoint() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CheckpointStore::new(dir.path().join("etl_state.json"));

        let first = EtlCheckpoint {
            last_run_time: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            processed_records: 10,
        };
        let second = EtlCheckpoint {
            last_run_time: Utc.with_ymd_and_hms(2024, 5, 8, 8, 0, 0).unwrap(),
            processed_records: 25,
        };
        store.save(&first).expect("first save");
        store.save(&second).expect("second save");

        let loaded = store.load().expect("load").expect("present");
        assert_eq!(loaded, second);
    }

    #[test]
    fn malformed_checkpoint_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("etl_state.json");
        std::fs::write(&path, "{not json").expect("write garbage");

        let store = CheckpointStore::new(path);
        let err = store.load().expect_err("should fail");
        assert_eq!(err.stage(), "checkpoint");
    }
}
