//! Factor fitting service

use super::average::AverageSpec;
use super::pattern::{DevelopmentPattern, Projection};
use crate::triangle::Triangle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A link ratio left out of fitting, keyed by origin label and the
/// development label the ratio develops *from*
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropCell {
    pub origin: String,
    pub development: String,
}

impl DropCell {
    pub fn new(origin: impl Into<String>, development: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            development: development.into(),
        }
    }
}

/// Fits LDFs from a triangle and develops explicit factors to ultimate
///
/// Implementations must be deterministic and free of side effects; the
/// factor grid calls them on every edit.
pub trait FactorFitter {
    /// One fitted factor per link column, `None` where nothing could be fit
    fn fit(&self, triangle: &Triangle, drop: &[DropCell], average: &AverageSpec) -> Vec<Option<f64>>;

    /// Cumulative factors and ultimate losses for explicit per-column factors
    fn develop(&self, triangle: &Triangle, factors: &[Option<f64>]) -> Projection {
        DevelopmentPattern::new(factors.to_vec()).project(triangle)
    }
}

/// Chain-ladder fitting over the link ratios of a cumulative triangle
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainLadderFitter;

impl FactorFitter for ChainLadderFitter {
    fn fit(&self, triangle: &Triangle, drop: &[DropCell], average: &AverageSpec) -> Vec<Option<f64>> {
        let dropped: HashSet<(&str, &str)> = drop
            .iter()
            .map(|cell| (cell.origin.as_str(), cell.development.as_str()))
            .collect();

        (0..triangle.n_developments() - 1)
            .map(|col| {
                let observed: Vec<usize> = (0..triangle.n_origins())
                    .filter(|&row| {
                        triangle.is_observed(row, col) && triangle.is_observed(row, col + 1)
                    })
                    .collect();

                // The window counts the latest diagonals before exclusions
                let window = match average.n_periods {
                    Some(n) => &observed[observed.len().saturating_sub(n)..],
                    None => &observed[..],
                };

                let development = triangle.developments()[col].as_str();
                let pairs: Vec<(f64, f64)> = window
                    .iter()
                    .filter(|&&row| {
                        let origin = triangle.origins()[row].as_str();
                        !dropped.contains(&(origin, development))
                    })
                    .filter_map(|&row| {
                        Some((triangle.value(row, col)?, triangle.value(row, col + 1)?))
                    })
                    .collect();

                average.method.average(&pairs)
            })
            .collect()
    }
}
