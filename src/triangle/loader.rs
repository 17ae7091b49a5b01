//! Load triangles from CSV
//!
//! Two layouts are accepted:
//! - long: header `origin,development,value`, one observed cell per line
//! - wide: first column holds origin labels, remaining headers are
//!   development labels; empty cells are unobserved

use super::Triangle;
use crate::error::TriangleError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Raw CSV row of the long layout
#[derive(Debug, serde::Deserialize)]
struct LongRow {
    #[serde(alias = "Origin", alias = "ORIGIN")]
    origin: String,
    #[serde(alias = "Development", alias = "DEVELOPMENT")]
    development: String,
    #[serde(alias = "Value", alias = "VALUE")]
    value: Option<f64>,
}

/// Load a triangle from a CSV file
pub fn load_triangle<P: AsRef<Path>>(path: P) -> Result<Triangle, TriangleError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let triangle = load_triangle_from_reader(file)?;
    info!(
        "Loaded {}x{} triangle from {}",
        triangle.n_origins(),
        triangle.n_developments(),
        path.display()
    );
    Ok(triangle)
}

/// Load a triangle from any reader (e.g., string buffer, network stream)
pub fn load_triangle_from_reader<R: std::io::Read>(reader: R) -> Result<Triangle, TriangleError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    if is_long_layout(&headers) {
        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            let row: LongRow = result?;
            rows.push(row);
        }
        from_long_rows(rows)
    } else {
        let mut records = Vec::new();
        for result in csv_reader.records() {
            records.push(result?);
        }
        from_wide_records(&headers, &records)
    }
}

fn is_long_layout(headers: &StringRecord) -> bool {
    let names: Vec<String> = headers.iter().map(|h| h.to_ascii_lowercase()).collect();
    names == ["origin", "development", "value"]
}

fn from_long_rows(rows: Vec<LongRow>) -> Result<Triangle, TriangleError> {
    let mut origins: Vec<String> = Vec::new();
    let mut developments: Vec<String> = Vec::new();
    let mut cells: HashMap<(String, String), f64> = HashMap::new();

    for row in rows {
        if !origins.contains(&row.origin) {
            origins.push(row.origin.clone());
        }
        if !developments.contains(&row.development) {
            developments.push(row.development.clone());
        }
        let Some(value) = row.value else { continue };
        let key = (row.origin, row.development);
        if cells.contains_key(&key) {
            return Err(TriangleError::Duplicate {
                origin: key.0,
                development: key.1,
            });
        }
        cells.insert(key, value);
    }

    // Ages like 12, 24, 120 should sort numerically, not lexically
    if developments.iter().all(|d| d.parse::<f64>().is_ok()) {
        developments.sort_by(|a, b| {
            let a: f64 = a.parse().unwrap_or(0.0);
            let b: f64 = b.parse().unwrap_or(0.0);
            a.total_cmp(&b)
        });
    }

    let values = origins
        .iter()
        .map(|o| {
            developments
                .iter()
                .map(|d| cells.get(&(o.clone(), d.clone())).copied())
                .collect()
        })
        .collect();

    Triangle::new(origins, developments, values)
}

fn from_wide_records(
    headers: &StringRecord,
    records: &[StringRecord],
) -> Result<Triangle, TriangleError> {
    let developments: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    let mut origins = Vec::with_capacity(records.len());
    let mut values = Vec::with_capacity(records.len());

    for record in records {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let mut fields = record.iter();
        let origin = fields.next().unwrap_or_default().to_string();

        let mut row = Vec::with_capacity(developments.len());
        for text in fields {
            if text.is_empty() {
                row.push(None);
            } else {
                let value: f64 = text.parse().map_err(|_| TriangleError::Parse {
                    line,
                    text: text.to_string(),
                })?;
                row.push(Some(value));
            }
        }
        row.resize(developments.len(), None);

        origins.push(origin);
        values.push(row);
    }

    Triangle::new(origins, developments, values)
}
