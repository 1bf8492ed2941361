//! Catalog — categorized lookup of dataset files on disk.
//!
//! A catalog root holds one sub-directory per category (for example
//! `prices/`, `labour/`, `production/`), each containing CSV datasets:
//!
//! ```text
//! data/
//! ├── labour/
//! │   └── unemployment_rate.csv
//! └── prices/
//!     ├── cpi.csv
//!     └── cgpi.csv
//! ```
//!
//! Listings are sorted by name so the order is stable across platforms.
//! Hidden entries (leading `.`) are skipped.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

const DATASET_EXTENSION: &str = "csv";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("unknown dataset `{name}` in category `{category}`")]
    UnknownDataset { category: String, name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One dataset file in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    pub category: String,
    /// File stem, without the `.csv` extension.
    pub name: String,
    pub path: PathBuf,
}

/// A catalog rooted at a directory of category folders.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CatalogError::NotADirectory(root));
        }
        Ok(Self { root })
    }

    /// Sorted category names.
    pub fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            // Follows symlinks, like `datasets` and `lookup` do.
            if !path.is_dir() {
                continue;
            }
            if let Some(name) = visible_name(&path) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Sorted datasets in `category`.
    pub fn datasets(&self, category: &str) -> Result<Vec<DatasetEntry>, CatalogError> {
        let dir = self.category_dir(category)?;

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_dataset(&path) {
                continue;
            }
            let Some(name) = visible_name(&path) else {
                continue;
            };
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => name,
            };
            entries.push(DatasetEntry {
                category: category.to_string(),
                name,
                path,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Find a dataset by name; a trailing `.csv` on `name` is optional.
    pub fn lookup(&self, category: &str, name: &str) -> Result<DatasetEntry, CatalogError> {
        let wanted = strip_extension(name);
        self.datasets(category)?
            .into_iter()
            .find(|d| d.name == wanted)
            .ok_or_else(|| CatalogError::UnknownDataset {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Every dataset, grouped by category in category order.
    pub fn all(&self) -> Result<Vec<DatasetEntry>, CatalogError> {
        let mut out = Vec::new();
        for category in self.categories()? {
            out.extend(self.datasets(&category)?);
        }
        Ok(out)
    }

    fn category_dir(&self, category: &str) -> Result<PathBuf, CatalogError> {
        // Category names are single path components.
        if category.is_empty() || category.contains(['/', '\\']) || category.starts_with('.') {
            return Err(CatalogError::UnknownCategory(category.to_string()));
        }
        let dir = self.root.join(category);
        if !dir.is_dir() {
            return Err(CatalogError::UnknownCategory(category.to_string()));
        }
        Ok(dir)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn visible_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    (!name.starts_with('.')).then(|| name.to_string())
}

fn is_dataset(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DATASET_EXTENSION))
}

fn strip_extension(name: &str) -> &str {
    let n = DATASET_EXTENSION.len() + 1;
    if name.len() > n && name.is_char_boundary(name.len() - n) {
        let (stem, ext) = name.split_at(name.len() - n);
        if ext.starts_with('.') && ext[1..].eq_ignore_ascii_case(DATASET_EXTENSION) {
            return stem;
        }
    }
    name
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
