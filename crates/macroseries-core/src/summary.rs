//! Summary — the figures and data sample handed to the insight writer.
//!
//! The normalizer returns points in input order; everything here works on a
//! chronologically sorted copy. [`Summary`] carries the headline figures
//! (max/min/mean/standard deviation) and [`render_sample`] turns the most
//! recent points into plain text suitable for embedding in a prompt.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::TimeSeriesPoint;

/// Default number of recent points included in a sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Headline figures for a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator); `None` below two points.
    pub std_dev: Option<f64>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl Summary {
    /// Compute the summary of `points`, or `None` if there are none.
    pub fn from_points(points: &[TimeSeriesPoint]) -> Option<Self> {
        let first = points.first()?;
        let count = points.len();

        let mut max = first.value;
        let mut min = first.value;
        let mut sum = 0.0;
        let mut first_date = first.date;
        let mut last_date = first.date;
        for p in points {
            max = max.max(p.value);
            min = min.min(p.value);
            sum += p.value;
            first_date = first_date.min(p.date);
            last_date = last_date.max(p.date);
        }
        let mean = sum / count as f64;

        let std_dev = (count > 1).then(|| {
            let ss: f64 = points.iter().map(|p| (p.value - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        });

        Some(Self {
            count,
            max,
            min,
            mean,
            std_dev,
            first_date,
            last_date,
        })
    }
}

/// A copy of `points` sorted by date. Points sharing a date keep input order.
pub fn sorted_chronologically(points: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.date);
    sorted
}

/// The most recent `n` points, oldest first.
pub fn recent_sample(points: &[TimeSeriesPoint], n: usize) -> Vec<TimeSeriesPoint> {
    let sorted = sorted_chronologically(points);
    let skip = sorted.len().saturating_sub(n);
    sorted.into_iter().skip(skip).collect()
}

/// Render points as `date,value` lines under a header line.
pub fn render_sample(points: &[TimeSeriesPoint]) -> String {
    let mut out = String::from("date,value\n");
    for p in points {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{},{}", p.date.format("%Y-%m-%d"), p.value);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
