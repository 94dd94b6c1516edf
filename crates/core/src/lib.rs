//! Core transform logic for Spendlake.
//!
//! This crate contains the pure transform pipeline with ZERO database
//! dependencies, plus the object-store lake adapter. All derived columns,
//! classification rules, and snapshot encoding live here.
//!
//! # Modules
//!
//! - `records` - Raw extraction rows and their enriched warehouse shapes
//! - `transform` - Pure enrichment: calendar parts, classifications, text metrics
//! - `lake` - Raw parquet snapshots in an OpenDAL-backed object store

pub mod lake;
pub mod records;
pub mod transform;
