//! Raw expense snapshots in an object-store data lake using Apache OpenDAL.
//!
//! Each run writes the untransformed extract as one parquet object under a
//! date-partitioned key, so the lake keeps a replayable history of what was
//! pulled from the source regardless of later transform changes.

mod config;
mod error;
mod snapshot;
mod store;

pub use config::LakeProvider;
pub use error::LakeError;
pub use snapshot::encode_expenses;
pub use store::{LakeStore, snapshot_key};
