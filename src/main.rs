use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use macroseries::catalog::Catalog;
use macroseries::config::Config;
use macroseries::render::{self, ListFormat, PointsFormat, SummaryFormat, SummaryReport};
use macroseries::source::{self, LoadOptions};
use macroseries::{summary, ColumnNames, NormalizationResult};

#[derive(Parser)]
#[command(name = "macroseries", about = "Normalise and summarise macroeconomic time-series CSVs")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/macroseries/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ColumnArgs {
    /// Name of the time-code column.
    #[arg(long)]
    time_column: Option<String>,
    /// Name of the value column.
    #[arg(long)]
    value_column: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the normalised points of a CSV file.
    Normalize {
        file: PathBuf,
        #[command(flatten)]
        columns: ColumnArgs,
        #[arg(long, value_enum, default_value_t = PointsFormat::Csv)]
        format: PointsFormat,
        /// Sort points by date before printing.
        #[arg(long)]
        sorted: bool,
    },
    /// Print summary figures and the most recent points of a CSV file.
    Summary {
        file: PathBuf,
        #[command(flatten)]
        columns: ColumnArgs,
        #[arg(long)]
        sample_size: Option<usize>,
        #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
    /// List catalog categories, or the datasets in one category.
    Catalog {
        category: Option<String>,
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Summarise a dataset looked up in the catalog.
    Show {
        category: String,
        name: String,
        #[arg(long)]
        root: Option<PathBuf>,
        #[command(flatten)]
        columns: ColumnArgs,
        #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new(default_level)
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_existing(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        }),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Normalize { file, columns, format, sorted } => {
            let result = load_and_normalize(&file, &config, &columns)?;
            let points = if sorted {
                summary::sorted_chronologically(&result.points)
            } else {
                result.points.clone()
            };
            render::write_points(&mut out, &result, &points, format)?;
        }
        Command::Summary { file, columns, sample_size, format } => {
            let sample_size = sample_size.unwrap_or(config.summary.sample_size);
            summarise(&mut out, &file, &config, &columns, sample_size, format)?;
        }
        Command::Catalog { category, root, format } => {
            let catalog = open_catalog(root, &config)?;
            match category {
                None => render::write_categories(&mut out, &catalog.categories()?, format)?,
                Some(category) => {
                    render::write_datasets(&mut out, &catalog.datasets(&category)?, format)?
                }
            }
        }
        Command::Show { category, name, root, columns, format } => {
            let catalog = open_catalog(root, &config)?;
            let entry = catalog.lookup(&category, &name)?;
            let sample_size = config.summary.sample_size;
            summarise(&mut out, &entry.path, &config, &columns, sample_size, format)?;
        }
    }

    Ok(())
}

fn load_and_normalize(
    file: &Path,
    config: &Config,
    columns: &ColumnArgs,
) -> anyhow::Result<NormalizationResult> {
    let options: LoadOptions = config.source.load_options()?;
    let table = source::load_table(file, options)
        .with_context(|| format!("loading {}", file.display()))?;

    let defaults = config.columns.column_names();
    let names = ColumnNames::new(
        columns.time_column.clone().unwrap_or(defaults.time_code),
        columns.value_column.clone().unwrap_or(defaults.value),
    );

    let result = macroseries::normalize_table(&table, &names)
        .with_context(|| format!("normalizing {}", file.display()))?;
    if let Some(warning) = &result.warning {
        tracing::warn!(file = %file.display(), "{warning}");
    }
    Ok(result)
}

fn summarise<W: Write>(
    out: W,
    file: &Path,
    config: &Config,
    columns: &ColumnArgs,
    sample_size: usize,
    format: SummaryFormat,
) -> anyhow::Result<()> {
    let result = load_and_normalize(file, config, columns)?;
    let report = SummaryReport::new(&result, sample_size)
        .context("normalization returned no points")?;
    let title = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    render::write_summary(out, &title, &report, format)
}

fn open_catalog(root: Option<PathBuf>, config: &Config) -> anyhow::Result<Catalog> {
    let root = root.unwrap_or_else(|| config.catalog.root.clone());
    Catalog::open(&root).with_context(|| format!("opening catalog at {}", root.display()))
}
