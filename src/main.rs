//! FASLR factor grid CLI
//!
//! Loads a triangle, applies exclusions and LDF selections, and prints the
//! factor table with CDFs and ultimate losses.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use faslr::development::{AverageCatalog, AverageMethod, AverageSpec};
use faslr::grid::{GridSnapshot, InvalidEntryPolicy};
use faslr::triangle::{load_triangle, sample};
use faslr::{FactorGrid, FactorTable, Settings};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned columns
    Text,
    /// Tab-separated, ready to paste into a spreadsheet
    Tsv,
    /// Every grid row as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "faslr", version, about = "Select loss development factors and project ultimate losses")]
struct Args {
    /// Triangle CSV (long or wide layout); the RAA sample is used when omitted
    #[arg(short, long)]
    triangle: Option<PathBuf>,

    /// JSON settings file with "engine" and "display" sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exclude a link ratio, e.g. 1982:12 or 1982:12-24
    #[arg(short = 'x', long = "exclude", value_name = "ORIGIN:DEV")]
    exclusions: Vec<String>,

    /// Averaging method for the fitted LDF row
    #[arg(short, long)]
    average: Option<AverageMethod>,

    /// Average only the latest N periods
    #[arg(short, long)]
    periods: Option<usize>,

    /// Select every fitted LDF
    #[arg(long)]
    select_all: bool,

    /// Select the fitted LDF of one column (index or label)
    #[arg(short, long = "select", value_name = "COLUMN")]
    selections: Vec<String>,

    /// Override a selected LDF, e.g. 12-24=2.5
    #[arg(short, long = "override", value_name = "COLUMN=VALUE")]
    overrides: Vec<String>,

    /// Reject non-numeric overrides instead of storing a blank
    #[arg(long)]
    strict: bool,

    /// Extra fitted rows to compare against, e.g. geometric:5
    #[arg(long = "compare", value_name = "METHOD[:YEARS]")]
    comparisons: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct Report {
    grid: GridSnapshot,
    comparisons: Vec<ComparisonRow>,
}

#[derive(Serialize)]
struct ComparisonRow {
    label: String,
    factors: Vec<Option<f64>>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::from_json_path(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.strict {
        settings.engine.invalid_entry = InvalidEntryPolicy::Reject;
    }
    if args.average.is_some() || args.periods.is_some() {
        settings.engine.average = AverageSpec {
            method: args.average.unwrap_or(settings.engine.average.method),
            n_periods: args.periods.or(settings.engine.average.n_periods),
        };
    }

    let triangle = match &args.triangle {
        Some(path) => load_triangle(path)
            .with_context(|| format!("Failed to load triangle from {}", path.display()))?,
        None => {
            info!("No triangle given; using the RAA sample");
            sample::raa()
        }
    };

    let mut grid = FactorGrid::with_config(triangle, settings.engine.clone());

    for spec in &args.exclusions {
        let (origin, development) = spec
            .split_once(':')
            .ok_or_else(|| anyhow!("Exclusion '{}' should look like ORIGIN:DEV", spec))?;
        let (row, col) = grid
            .locate(origin, development)
            .ok_or_else(|| anyhow!("No link ratio at origin {} development {}", origin, development))?;
        grid.set_exclusion(row, col, true)?;
    }

    if args.select_all {
        grid.select_fitted_row();
    }

    for column in &args.selections {
        let col = resolve_column(&grid, column)?;
        grid.select_fitted_factor(col)?;
    }

    for spec in &args.overrides {
        let (column, value) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("Override '{}' should look like COLUMN=VALUE", spec))?;
        let col = resolve_column(&grid, column)?;
        grid.override_factor(col, value)?;
    }

    let mut catalog = AverageCatalog::new();
    for spec in &args.comparisons {
        let idx = catalog.add("", parse_average(spec)?);
        catalog.set_checked(idx, true);
    }
    let comparisons = grid.fit_checked(&catalog);

    info!(
        "Grid ready: {} origins, {} columns, {} exclusions",
        grid.n_rows(),
        grid.n_columns(),
        grid.exclusions().count()
    );

    match args.format {
        OutputFormat::Json => {
            let report = Report {
                grid: grid.snapshot(),
                comparisons: comparisons
                    .into_iter()
                    .map(|(label, factors)| ComparisonRow { label, factors })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Tsv | OutputFormat::Text => {
            let table = FactorTable::new(&grid, settings.display.clone());
            let mut rows = table.render(&grid);
            for (label, factors) in comparisons {
                let mut line = vec![label];
                line.extend(factors.iter().map(|f| settings.display.ratio(*f)));
                rows.push(line);
            }

            if args.format == OutputFormat::Tsv {
                for row in &rows {
                    println!("{}", row.join("\t"));
                }
            } else {
                print_aligned(&rows);
            }
        }
    }

    Ok(())
}

/// Column given as a label, or failing that a zero-based index
fn resolve_column(grid: &FactorGrid, column: &str) -> Result<usize> {
    grid.column_index(column)
        .or_else(|| {
            column
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&index| index < grid.n_columns())
        })
        .ok_or_else(|| anyhow!("Unknown development column '{}'", column))
}

/// METHOD or METHOD:YEARS
fn parse_average(spec: &str) -> Result<AverageSpec> {
    let (method, years) = match spec.split_once(':') {
        Some((method, years)) => (method, Some(years)),
        None => (spec, None),
    };
    let method: AverageMethod = method.parse().map_err(|e: String| anyhow!(e))?;
    let n_periods = years
        .map(|y| y.trim().parse::<usize>())
        .transpose()
        .with_context(|| format!("Bad number of years in '{}'", spec))?;
    Ok(AverageSpec { method, n_periods })
}

fn print_aligned(rows: &[Vec<String>]) {
    let n_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..n_cols)
        .map(|c| {
            rows.iter()
                .filter_map(|r| r.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, text)| {
                if c == 0 {
                    format!("{:<width$}", text, width = widths[c])
                } else {
                    format!("{:>width$}", text, width = widths[c])
                }
            })
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
