//! macroseries — tolerant normalization of macroeconomic time-series CSVs.
//!
//! Re-exports the pipeline from `macroseries-core` so integration tests and
//! the binary share one import path, and adds the [`render`] layer that turns
//! pipeline output into text for the terminal.
//!
//! # Pipeline
//!
//! ```text
//! Catalog ──► Source ──► Normalizer ──► Summary
//!                            │             │
//!                            └──► Render ◄─┘
//! ```

pub mod render;

pub use macroseries_core::{
    catalog, config, date_code, normalize, normalize_table, normalizer, source, summary, types,
    ColumnNames, NormalizationResult, NormalizeError, RawRecord, RawTable, RawValue,
    TimeSeriesPoint,
};
