//! Test builders — ergonomic constructors for `RawTable`, `RawRecord` and
//! `TimeSeriesPoint` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::NaiveDate;
use macroseries::source::{self, LoadOptions};
use macroseries::{RawRecord, RawTable, TimeSeriesPoint};

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawTable`] fixtures.
///
/// ```rust
/// let table = TableBuilder::new(["time_code", "value"])
///     .row(["202001", "1.5"])
///     .row(["2020", "x"])
///     .build();
/// ```
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> RawTable {
        RawTable::new(self.headers, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Calendar date shorthand.
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Point shorthand.
pub fn point(y: i32, m: u32, d: u32, value: f64) -> TimeSeriesPoint {
    TimeSeriesPoint::new(ymd(y, m, d), value)
}

/// Records with `valid` good rows followed by `bad` rows with garbage values.
pub fn records_with_bad_values(valid: usize, bad: usize) -> Vec<RawRecord> {
    let good = (0..valid).map(|i| RawRecord::new(format!("2010{:02}", i % 12 + 1), i as f64));
    let garbage = (0..bad).map(|_| RawRecord::new("201001", "???"));
    good.chain(garbage).collect()
}

/// Parse an in-memory CSV document with default options.
pub fn table_from_csv(csv: &str) -> RawTable {
    source::read_table(csv.as_bytes(), LoadOptions::default()).expect("fixture CSV must parse")
}
