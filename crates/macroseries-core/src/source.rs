//! Source — reads delimited text files into a [`RawTable`].
//!
//! Japanese statistics portals still publish many downloads as Shift_JIS, so
//! input that is not valid UTF-8 is decoded as Shift_JIS before parsing.
//! Header names are trimmed; cell values are passed through untouched and
//! rows of uneven length are accepted.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::SHIFT_JIS;
use thiserror::Error;

use crate::types::RawTable;

/// Errors that can arise while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("input is neither UTF-8 nor Shift_JIS")]
    Decode,

    #[error("input has no header row")]
    Empty,
}

/// Parsing options for [`read_table`] and [`load_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read and parse the file at `path`.
pub fn load_table(path: &Path, options: LoadOptions) -> Result<RawTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_table(&bytes, options)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "loaded table"
    );
    Ok(table)
}

/// Parse an in-memory delimited document.
pub fn read_table(bytes: &[u8], options: LoadOptions) -> Result<RawTable, LoadError> {
    let text = decode(bytes)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(LoadError::Empty);
    }

    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(RawTable::new(headers, rows))
}

/// Decode `bytes` as UTF-8 (dropping a leading BOM), falling back to Shift_JIS.
pub fn decode(bytes: &[u8]) -> Result<String, LoadError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.trim_start_matches('\u{feff}').to_string());
    }

    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(LoadError::Decode);
    }
    tracing::debug!("input decoded as Shift_JIS");
    Ok(text.into_owned())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
