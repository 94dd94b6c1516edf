//! Common types used across the pipeline.

pub mod checkpoint;
pub mod report;
pub mod window;

pub use checkpoint::EtlCheckpoint;
pub use report::RunReport;
pub use window::DateWindow;
