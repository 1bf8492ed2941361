//! Date-code resolution.
//!
//! Statistical tables encode the observation period as a bare digit string:
//! `YYYY` for annual series, `YYYYMM` for monthly ones and `YYYYMMDD` for
//! daily ones. [`resolve_date_code`] maps such a code to a calendar date.
//!
//! # Precedence
//!
//! Resolution is attempted in a fixed order and the first success wins:
//!
//! 1. length ≥ 6 — first 6 characters as `YYYYMM` (day 1)
//! 2. length ≥ 8 — first 8 characters as `YYYYMMDD`
//! 3. length == 4 — `YYYY` as January 1
//!
//! Step 1 runs before step 2 even for 8-character codes, so `"20200229"`
//! resolves to 2020-02-01, not to the leap day. Datasets downstream depend
//! on this mapping; do not reorder the steps.

use chrono::NaiveDate;

/// Resolve a time code to a calendar date, or `None` if no rule applies.
///
/// The code is used as given: surrounding whitespace is not stripped, so
/// `" 202001"` does not resolve. Callers building codes by hand must trim
/// them first.
pub fn resolve_date_code(code: &str) -> Option<NaiveDate> {
    let len = code.chars().count();

    if len >= 6 {
        if let Some(date) = parse_year_month(&prefix(code, 6)) {
            return Some(date);
        }
    }
    if len >= 8 {
        if let Some(date) = parse_year_month_day(&prefix(code, 8)) {
            return Some(date);
        }
    }
    if len == 4 {
        return parse_year_month(&format!("{code}01"));
    }
    None
}

/// Parse exactly six ASCII digits as `YYYYMM`, day fixed at 1.
pub fn parse_year_month(s: &str) -> Option<NaiveDate> {
    if s.len() != 6 || !all_digits(s) {
        return None;
    }
    let year = year_of(&s[..4])?;
    let month: u32 = s[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Parse exactly eight ASCII digits as `YYYYMMDD`.
pub fn parse_year_month_day(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !all_digits(s) {
        return None;
    }
    let year = year_of(&s[..4])?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn prefix(code: &str, n: usize) -> String {
    code.chars().take(n).collect()
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// Year 0000 is not a valid calendar year here.
fn year_of(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    (1..=9999).contains(&year).then_some(year)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
