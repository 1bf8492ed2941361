//! Render — formats normalised series and summaries for output.
//!
//! Everything here writes to a caller-supplied [`std::io::Write`] so the
//! binary can target stdout and tests can target a `Vec<u8>`.

use std::io::Write;

use macroseries_core::catalog::DatasetEntry;
use macroseries_core::summary::{self, Summary};
use macroseries_core::{NormalizationResult, TimeSeriesPoint};
use serde::Serialize;

/// Output format for `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PointsFormat {
    Csv,
    Json,
}

/// Output format for `summary` and `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Output format for `catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

/// Summary figures plus the recent-point sample, as emitted in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub summary: Summary,
    pub input_rows: usize,
    pub discarded: usize,
    pub warning: Option<String>,
    pub sample: Vec<TimeSeriesPoint>,
}

impl SummaryReport {
    /// Build a report from a normalization result, sampling the most recent
    /// `sample_size` points.
    pub fn new(result: &NormalizationResult, sample_size: usize) -> Option<Self> {
        Some(Self {
            summary: Summary::from_points(&result.points)?,
            input_rows: result.input_rows(),
            discarded: result.discarded,
            warning: result.warning.clone(),
            sample: summary::recent_sample(&result.points, sample_size),
        })
    }
}

/// Write points as `date,value` CSV rows.
pub fn write_points_csv<W: Write>(out: W, points: &[TimeSeriesPoint]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full normalization result as pretty JSON.
pub fn write_result_json<W: Write>(mut out: W, result: &NormalizationResult) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, result)?;
    writeln!(out)?;
    Ok(())
}

/// Write points in the requested format.
pub fn write_points<W: Write>(
    out: W,
    result: &NormalizationResult,
    points: &[TimeSeriesPoint],
    format: PointsFormat,
) -> anyhow::Result<()> {
    match format {
        PointsFormat::Csv => write_points_csv(out, points),
        PointsFormat::Json => write_result_json(
            out,
            &NormalizationResult {
                points: points.to_vec(),
                discarded: result.discarded,
                warning: result.warning.clone(),
            },
        ),
    }
}

/// Write a summary report in the requested format.
pub fn write_summary<W: Write>(
    mut out: W,
    title: &str,
    report: &SummaryReport,
    format: SummaryFormat,
) -> anyhow::Result<()> {
    match format {
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        SummaryFormat::Text => out.write_all(summary_text(title, report).as_bytes())?,
    }
    Ok(())
}

/// Write category names, one per line or as a JSON array.
pub fn write_categories<W: Write>(
    mut out: W,
    names: &[String],
    format: ListFormat,
) -> anyhow::Result<()> {
    match format {
        ListFormat::Text => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut out, names)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write dataset entries as `name<TAB>path` lines or as a JSON array.
pub fn write_datasets<W: Write>(
    mut out: W,
    datasets: &[DatasetEntry],
    format: ListFormat,
) -> anyhow::Result<()> {
    match format {
        ListFormat::Text => {
            for dataset in datasets {
                writeln!(out, "{}\t{}", dataset.name, dataset.path.display())?;
            }
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut out, datasets)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Plain-text rendering of a summary report.
pub fn summary_text(title: &str, report: &SummaryReport) -> String {
    let s = &report.summary;
    let std_dev = s
        .std_dev
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "n/a".to_string());

    let mut text = format!(
        "{title}\n\
         period:    {} .. {}\n\
         points:    {} ({} discarded)\n\
         max:       {:.4}\n\
         min:       {:.4}\n\
         mean:      {:.4}\n\
         std dev:   {std_dev}\n",
        s.first_date.format("%Y-%m-%d"),
        s.last_date.format("%Y-%m-%d"),
        s.count,
        report.discarded,
        s.max,
        s.min,
        s.mean,
    );
    if let Some(warning) = &report.warning {
        text.push_str(&format!("warning:   {warning}\n"));
    }
    text.push_str(&format!("\nrecent {} points:\n", report.sample.len()));
    text.push_str(&summary::render_sample(&report.sample));
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
