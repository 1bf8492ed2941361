//! Configuration types for macroseries.
//!
//! [`Config::load`] reads `~/.config/macroseries/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::source::LoadOptions;
use crate::types::ColumnNames;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[columns]
time_code = "time_code"
value     = "value"

[catalog]
root = "data"

[summary]
sample_size = 100

[source]
delimiter = ","
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/macroseries/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub columns: ColumnsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// `[columns]` section: the field names the normalizer looks for.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_time_code")]
    pub time_code: String,
    #[serde(default = "default_value")]
    pub value: String,
}

fn default_time_code() -> String { "time_code".to_string() }
fn default_value() -> String { "value".to_string() }

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            time_code: default_time_code(),
            value: default_value(),
        }
    }
}

impl ColumnsConfig {
    pub fn column_names(&self) -> ColumnNames {
        ColumnNames::new(self.time_code.clone(), self.value.clone())
    }
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_root")]
    pub root: PathBuf,
}

fn default_catalog_root() -> PathBuf { PathBuf::from("data") }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { root: default_catalog_root() }
    }
}

/// `[summary]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

fn default_sample_size() -> usize { crate::summary::DEFAULT_SAMPLE_SIZE }

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { sample_size: default_sample_size() }
    }
}

/// `[source]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Single ASCII character; `"\t"` selects tab-separated input.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String { ",".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self { delimiter: default_delimiter() }
    }
}

impl SourceConfig {
    pub fn load_options(&self) -> anyhow::Result<LoadOptions> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(LoadOptions { delimiter: *b }),
            _ => anyhow::bail!(
                "source.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/macroseries/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }
        Self::layered(path)
    }

    /// Load a file the user named explicitly. Unlike [`Config::load_from`]
    /// this never creates anything: a missing file is an error.
    pub fn load_existing(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        Self::layered(path)
    }

    fn layered(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    config_path_from(env_non_empty("XDG_CONFIG_HOME"), env_non_empty("HOME"))
}

// Empty variables count as unset.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    xdg_config_home
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(home.unwrap_or_else(|| ".".to_string())).join(".config"))
        .join("macroseries")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
