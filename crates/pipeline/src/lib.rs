//! Run coordination for the expense pipeline.
//!
//! This crate wires extraction, transformation, warehouse loading, lake
//! snapshots, and aggregate rebuilds into one ordered run, behind seams
//! that let every stage be exercised without live backends.

mod checkpoint;
mod runner;
mod stores;
mod traits;

#[cfg(test)]
mod tests;

pub use checkpoint::CheckpointStore;
pub use runner::EtlRunner;
pub use traits::{ExpenseSource, SnapshotSink, WarehouseSink};
