//! Core types for macroseries-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! loaded [`RawTable`], the per-row [`RawRecord`], and the normalised
//! [`TimeSeriesPoint`] / [`NormalizationResult`] handed to collaborators.

use chrono::NaiveDate;
use serde::Serialize;

/// A tabular dataset as loaded from disk, before any interpretation.
///
/// Header names are stored trimmed. Rows may be shorter than the header;
/// missing trailing cells read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the column whose trimmed name equals `name`.
    ///
    /// A leading UTF-8 BOM on a header (left behind by spreadsheet exports)
    /// is ignored.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|h| h.trim().trim_start_matches('\u{feff}').trim() == wanted)
    }

    /// The cell at `(row, col)`, or `""` if the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The field value of a raw row: text as read from a file, or an already
/// numeric value supplied by an in-memory caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

/// One input row: a time code (expected 4, 6 or 8 digits) and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub time_code: String,
    pub value: RawValue,
}

impl RawRecord {
    pub fn new(time_code: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            time_code: time_code.into(),
            value: value.into(),
        }
    }
}

/// A single cleaned observation.
///
/// `date` always comes from exactly one time-code interpretation and `value`
/// is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Output of a normalization run.
///
/// `points` keep input order; sorting is the consumer's job. `warning` is
/// set only when fewer than half of the input rows survived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationResult {
    pub points: Vec<TimeSeriesPoint>,
    pub discarded: usize,
    pub warning: Option<String>,
}

impl NormalizationResult {
    /// Number of input rows the result was built from.
    pub fn input_rows(&self) -> usize {
        self.points.len() + self.discarded
    }
}

/// Names of the two fields the normalizer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub time_code: String,
    pub value: String,
}

impl ColumnNames {
    pub fn new(time_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            time_code: time_code.into(),
            value: value.into(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new("time_code", "value")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
