//! LDF averaging methods

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How link ratios in one development column are averaged into an LDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageMethod {
    /// Sum of later values over sum of earlier values
    #[default]
    Volume,
    /// Arithmetic mean of the ratios
    Straight,
    /// Geometric mean of the ratios
    Geometric,
    /// Arithmetic mean after dropping the single highest and lowest ratio
    Medial,
}

impl AverageMethod {
    pub fn label(&self) -> &'static str {
        match self {
            AverageMethod::Volume => "volume-weighted",
            AverageMethod::Straight => "straight",
            AverageMethod::Geometric => "geometric",
            AverageMethod::Medial => "medial",
        }
    }

    /// Average a column given `(earlier, later)` cumulative value pairs
    ///
    /// Returns `None` when no factor can be formed from the pairs.
    pub fn average(&self, pairs: &[(f64, f64)]) -> Option<f64> {
        match self {
            AverageMethod::Volume => {
                let from: f64 = pairs.iter().map(|(a, _)| a).sum();
                let to: f64 = pairs.iter().map(|(_, b)| b).sum();
                if pairs.is_empty() || from == 0.0 {
                    None
                } else {
                    Some(to / from)
                }
            }
            AverageMethod::Straight => link_ratios(pairs).map(|r| mean(&r)),
            AverageMethod::Geometric => {
                let ratios = link_ratios(pairs)?;
                if ratios.iter().any(|&r| r <= 0.0) {
                    return None;
                }
                let log_mean = ratios.iter().map(|r| r.ln()).sum::<f64>() / ratios.len() as f64;
                Some(log_mean.exp())
            }
            AverageMethod::Medial => {
                let mut ratios = link_ratios(pairs)?;
                if ratios.len() >= 3 {
                    ratios.sort_by(f64::total_cmp);
                    Some(mean(&ratios[1..ratios.len() - 1]))
                } else {
                    Some(mean(&ratios))
                }
            }
        }
    }
}

/// Individual link ratios, skipping zero denominators; `None` if none remain
fn link_ratios(pairs: &[(f64, f64)]) -> Option<Vec<f64>> {
    let ratios: Vec<f64> = pairs
        .iter()
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, b)| b / a)
        .collect();
    if ratios.is_empty() {
        None
    } else {
        Some(ratios)
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl fmt::Display for AverageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AverageMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" | "volume-weighted" => Ok(AverageMethod::Volume),
            "straight" | "simple" => Ok(AverageMethod::Straight),
            "geometric" => Ok(AverageMethod::Geometric),
            "medial" => Ok(AverageMethod::Medial),
            other => Err(format!("Unknown average method: {}", other)),
        }
    }
}

/// Averaging method plus the number of latest periods it looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AverageSpec {
    #[serde(default)]
    pub method: AverageMethod,

    /// Only the latest `n` observed ratios per column; `None` uses all
    #[serde(default)]
    pub n_periods: Option<usize>,
}

impl AverageSpec {
    pub fn all_years(method: AverageMethod) -> Self {
        Self { method, n_periods: None }
    }

    pub fn latest(method: AverageMethod, n_periods: usize) -> Self {
        Self {
            method,
            n_periods: Some(n_periods),
        }
    }

    /// Row header for the fitted LDF row, e.g. "Volume-Weighted LDF"
    pub fn row_label(&self) -> String {
        let method = title_case(self.method.label());
        match self.n_periods {
            Some(n) => format!("{}-Year {} LDF", n, method),
            None => format!("{} LDF", method),
        }
    }

    /// Short description, e.g. "5-year volume-weighted"
    pub fn describe(&self) -> String {
        match self.n_periods {
            Some(n) => format!("{}-year {}", n, self.method.label()),
            None => format!("all-year {}", self.method.label()),
        }
    }
}

fn title_case(text: &str) -> String {
    text.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
