//! Normalizer — turns raw rows into a date-indexed series of [`TimeSeriesPoint`]s.
//!
//! Each row's time code is resolved by [`date_code::resolve_date_code`] and its
//! value coerced to a finite `f64`. Rows failing either step are dropped and
//! counted; they never raise. Only two conditions are fatal: a missing
//! required column and an empty result.

use thiserror::Error;

use crate::date_code;
use crate::types::{ColumnNames, NormalizationResult, RawRecord, RawTable, RawValue, TimeSeriesPoint};

/// A warning is attached when fewer than this share of rows survive.
pub const WARN_SURVIVAL_RATIO: f64 = 0.5;

/// Fatal normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("missing required column `{column}` (available: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("no valid rows: all {rows} rows had an unparseable date or value")]
    NoValidData { rows: usize },
}

/// Resolve the configured columns in `table`, then normalise every row.
///
/// Column presence is checked before any row is looked at, so a missing
/// column is reported even for a table with no rows.
pub fn normalize_table(
    table: &RawTable,
    columns: &ColumnNames,
) -> Result<NormalizationResult, NormalizeError> {
    let time_idx = require_column(table, &columns.time_code)?;
    let value_idx = require_column(table, &columns.value)?;

    let records: Vec<RawRecord> = (0..table.len())
        .map(|row| RawRecord::new(table.cell(row, time_idx), table.cell(row, value_idx)))
        .collect();

    normalize(&records)
}

/// Normalise a sequence of raw records.
///
/// Output preserves input order. Fails with [`NormalizeError::NoValidData`]
/// if no row survives.
pub fn normalize(records: &[RawRecord]) -> Result<NormalizationResult, NormalizeError> {
    let initial = records.len();

    let points: Vec<TimeSeriesPoint> = records.iter().filter_map(normalize_record).collect();
    let survived = points.len();

    if points.is_empty() {
        return Err(NormalizeError::NoValidData { rows: initial });
    }

    let discarded = initial - survived;
    let warning = ((survived as f64) < (initial as f64) * WARN_SURVIVAL_RATIO)
        .then(|| discard_warning(discarded, initial));

    tracing::debug!(initial, survived, discarded, "normalized rows");

    Ok(NormalizationResult {
        points,
        discarded,
        warning,
    })
}

/// Resolve one record, or `None` if its date or value is unusable.
pub fn normalize_record(record: &RawRecord) -> Option<TimeSeriesPoint> {
    let date = date_code::resolve_date_code(&record.time_code)?;
    let value = coerce_value(&record.value)?;
    Some(TimeSeriesPoint::new(date, value))
}

/// Coerce a raw value to a finite `f64`.
///
/// Text is trimmed before parsing. Empty text, non-numeric text, and
/// `NaN`/infinite results are rejected.
pub fn coerce_value(value: &RawValue) -> Option<f64> {
    let v = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

fn require_column(table: &RawTable, name: &str) -> Result<usize, NormalizeError> {
    table
        .column_index(name)
        .ok_or_else(|| NormalizeError::MissingColumn {
            column: name.trim().to_string(),
            available: table.headers.clone(),
        })
}

fn discard_warning(discarded: usize, initial: usize) -> String {
    format!("{discarded} of {initial} rows were discarded because their date or value could not be parsed")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
