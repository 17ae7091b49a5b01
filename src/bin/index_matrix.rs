//! Print a rate-change index and its index matrix
//!
//! Each matrix cell is the factor that brings the row's origin period to the
//! level of the column's origin period.

use anyhow::{Context, Result};
use clap::Parser;
use faslr::index::RateIndex;
use faslr::DisplayConfig;

#[derive(Debug, Parser)]
#[command(name = "index_matrix", about = "Rate-change index matrix")]
struct Args {
    /// Origin period labels, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    origins: Vec<String>,

    /// Rate change per origin as a decimal (0.05 = +5%), comma separated
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    changes: Vec<f64>,

    /// Decimal places shown
    #[arg(long, default_value_t = 3)]
    decimals: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let index = RateIndex::new(args.origins, args.changes).context("Invalid rate index")?;
    let config = DisplayConfig {
        ratio_decimals: args.decimals,
        ..Default::default()
    };

    let width = index
        .origins()
        .iter()
        .map(|o| o.len())
        .max()
        .unwrap_or(0)
        .max(args.decimals + 3);

    println!("{:<width$}  {:>width$}  {:>width$}", "Origin", "Change", "Level", width = width);
    for ((origin, change), level) in index.origins().iter().zip(index.changes()).zip(index.levels()) {
        println!(
            "{:<width$}  {:>width$}  {:>width$}",
            origin,
            config.ratio(Some(*change)),
            config.ratio(Some(*level)),
            width = width
        );
    }
    println!();

    let header: Vec<String> = index
        .origins()
        .iter()
        .map(|o| format!("{:>width$}", o, width = width))
        .collect();
    println!("{:<width$}  {}", "", header.join("  "), width = width);
    for (origin, row) in index.origins().iter().zip(index.matrix()) {
        let cells: Vec<String> = row
            .iter()
            .map(|f| format!("{:>width$}", config.ratio(Some(*f)), width = width))
            .collect();
        println!("{:<width$}  {}", origin, cells.join("  "), width = width);
    }

    Ok(())
}
