//! Domain-specific assertion macros for macroseries harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* normalization invariant was violated.

use macroseries::NormalizationResult;

/// Assert the dates of a result's points, in order.
///
/// ```rust
/// assert_dates!(result, [ymd(2020, 1, 1), ymd(2020, 2, 1)]);
/// ```
#[macro_export]
macro_rules! assert_dates {
    ($result:expr, [$($date:expr),* $(,)?]) => {{
        let result: &macroseries::NormalizationResult = &$result;
        let actual: Vec<chrono::NaiveDate> = result.points.iter().map(|p| p.date).collect();
        let expected: Vec<chrono::NaiveDate> = vec![$($date),*];
        pretty_assertions::assert_eq!(actual, expected, "point dates differ");
    }};
}

/// Assert the survivor and discard counts of a result.
///
/// ```rust
/// assert_counts!(result, points = 40, discarded = 60);
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($result:expr, points = $points:expr, discarded = $discarded:expr) => {{
        let result: &macroseries::NormalizationResult = &$result;
        let (points, discarded): (usize, usize) = ($points, $discarded);
        if result.points.len() != points || result.discarded != discarded {
            panic!(
                "assert_counts! failed:\n  expected: {} points, {} discarded\n  actual:   {} points, {} discarded",
                points,
                discarded,
                result.points.len(),
                result.discarded
            );
        }
    }};
}

/// Assert that a result carries a high-discard warning mentioning `n` rows.
#[macro_export]
macro_rules! assert_warns {
    ($result:expr, $discarded:expr) => {{
        let result: &macroseries::NormalizationResult = &$result;
        let discarded: usize = $discarded;
        match &result.warning {
            Some(w) if w.contains(&discarded.to_string()) => {}
            Some(w) => panic!(
                "assert_warns! failed: warning does not mention {} rows: {:?}",
                discarded, w
            ),
            None => panic!(
                "assert_warns! failed: no warning ({} points, {} discarded)",
                result.points.len(),
                result.discarded
            ),
        }
    }};
}

/// Assert that a result carries no warning.
#[macro_export]
macro_rules! assert_silent {
    ($result:expr) => {{
        let result: &macroseries::NormalizationResult = &$result;
        if let Some(w) = &result.warning {
            panic!("assert_silent! failed: unexpected warning {:?}", w);
        }
    }};
}

/// Invariants every successful result must satisfy regardless of input:
/// finite values, non-empty points, `points + discarded == input rows`, and
/// a warning exactly when fewer than half the rows survived.
pub fn assert_result_invariants(result: &NormalizationResult, input_rows: usize) {
    assert!(!result.points.is_empty(), "a successful result is never empty");
    assert_eq!(
        result.points.len() + result.discarded,
        input_rows,
        "points + discarded must equal input rows"
    );
    for p in &result.points {
        assert!(p.value.is_finite(), "non-finite value {} at {}", p.value, p.date);
    }
    let should_warn = (result.points.len() as f64) < input_rows as f64 * 0.5;
    assert_eq!(
        result.warning.is_some(),
        should_warn,
        "warning presence must follow the half-survival threshold"
    );
}
