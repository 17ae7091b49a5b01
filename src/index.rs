//! Rate-change index and index matrix
//!
//! Cumulative level of per-origin rate changes, and the matrix of factors
//! that restate one origin period at another period's level.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateIndex {
    origins: Vec<String>,
    changes: Vec<f64>,
    levels: Vec<f64>,
}

impl RateIndex {
    /// Build from one rate change per origin; the first origin's change is ignored
    pub fn new(origins: Vec<String>, changes: Vec<f64>) -> Result<Self, IndexError> {
        if origins.is_empty() {
            return Err(IndexError::Empty);
        }
        if origins.len() != changes.len() {
            return Err(IndexError::LengthMismatch {
                origins: origins.len(),
                changes: changes.len(),
            });
        }

        let mut levels = Vec::with_capacity(changes.len());
        let mut level = 1.0_f64;
        for (i, &change) in changes.iter().enumerate() {
            if i > 0 {
                level *= 1.0 + change;
            }
            if !(level > 0.0 && level.is_finite()) {
                return Err(IndexError::NonPositive {
                    origin: origins[i].clone(),
                    change,
                });
            }
            levels.push(level);
        }

        Ok(Self { origins, changes, levels })
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn changes(&self) -> &[f64] {
        &self.changes
    }

    /// Cumulative level per origin, first origin = 1.0
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Factor that brings each origin to the latest origin's level (latest is 1.0)
    pub fn relative_to_latest(&self) -> Vec<f64> {
        let latest = self.levels.last().copied().unwrap_or(1.0);
        self.levels.iter().map(|l| latest / l).collect()
    }

    /// `matrix()[i][j]` brings origin i to origin j's level
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.levels
            .iter()
            .map(|from| self.levels.iter().map(|to| to / from).collect())
            .collect()
    }
}
