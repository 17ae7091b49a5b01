//! Read-only table over a plain triangle

use super::clipboard::copy_region;
use super::format::{DisplayConfig, ValueKind};
use super::table::{Background, CellStyle, DisplayCell};
use crate::triangle::Triangle;

/// Triangle preview showing either cumulative values or link ratios
#[derive(Debug, Clone)]
pub struct TriangleTable<'a> {
    triangle: &'a Triangle,
    kind: ValueKind,
    config: DisplayConfig,
}

impl<'a> TriangleTable<'a> {
    pub fn new(triangle: &'a Triangle, kind: ValueKind, config: DisplayConfig) -> Self {
        Self { triangle, kind, config }
    }

    pub fn row_count(&self) -> usize {
        self.triangle.n_origins()
    }

    pub fn column_count(&self) -> usize {
        match self.kind {
            ValueKind::Value => self.triangle.n_developments(),
            ValueKind::Ratio => self.triangle.n_developments() - 1,
        }
    }

    pub fn row_header(&self, row: usize) -> Option<&str> {
        self.triangle.origins().get(row).map(String::as_str)
    }

    pub fn column_header(&self, col: usize) -> Option<String> {
        if col >= self.column_count() {
            return None;
        }
        match self.kind {
            ValueKind::Value => Some(self.triangle.developments()[col].clone()),
            ValueKind::Ratio => self.triangle.link_labels().get(col).cloned(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<DisplayCell> {
        if row >= self.row_count() || col >= self.column_count() {
            return None;
        }

        // A ratio column is observed once its later development is
        let last_needed = match self.kind {
            ValueKind::Value => col,
            ValueKind::Ratio => col + 1,
        };
        let observed = self.triangle.is_observed(row, last_needed);

        let value = match (observed, self.kind) {
            (false, _) => None,
            (true, ValueKind::Value) => self.triangle.value(row, col),
            (true, ValueKind::Ratio) => self.triangle.link_ratios().get(row, col),
        };

        Some(DisplayCell {
            text: self.config.format(value, self.kind),
            style: CellStyle {
                background: if observed {
                    Background::Triangle
                } else {
                    Background::LowerDiagonal
                },
                strike_out: false,
            },
            editable: false,
        })
    }

    pub fn text(&self, row: usize, col: usize) -> String {
        self.cell(row, col).map(|c| c.text).unwrap_or_default()
    }

    pub fn copy(&self, cells: &[(usize, usize)]) -> Result<String, csv::Error> {
        copy_region(cells, |row, col| self.text(row, col))
    }
}
