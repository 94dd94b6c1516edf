//! Shared types, errors, and configuration for Spendlake.
//!
//! This crate provides common types used across all other crates:
//! - Run window and run report values
//! - The incremental-run checkpoint value
//! - Pipeline-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EtlConfig;
pub use error::{EtlError, EtlResult};
