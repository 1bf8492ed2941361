//! macroseries-core — normalization pipeline for macroeconomic time series.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all of them.
//!
//! # Pipeline
//!
//! ```text
//! Catalog ──► Source ──► Normalizer ──► Summary
//!  (path)    (RawTable)  (points)       (figures + sample)
//! ```
//!
//! Every stage is synchronous and stateless. Only `source` and `catalog`
//! touch the filesystem; the normalizer is a pure function of its input.

pub mod catalog;
pub mod config;
pub mod date_code;
pub mod normalizer;
pub mod source;
pub mod summary;
pub mod types;

pub use normalizer::{normalize, normalize_table, NormalizeError};
pub use types::{ColumnNames, NormalizationResult, RawRecord, RawTable, RawValue, TimeSeriesPoint};
