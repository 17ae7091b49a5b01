//! Per-cell exclusion flags over the link-ratio grid

use crate::error::GridError;

/// Boolean grid matching the link ratios; `true` leaves the ratio out of fitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionMask {
    n_rows: usize,
    n_columns: usize,
    cells: Vec<bool>,
}

impl ExclusionMask {
    /// Mask with nothing excluded
    pub fn new(n_rows: usize, n_columns: usize) -> Self {
        Self {
            n_rows,
            n_columns,
            cells: vec![false; n_rows * n_columns],
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.n_rows || col >= self.n_columns {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.n_rows,
                cols: self.n_columns,
            });
        }
        Ok(row * self.n_columns + col)
    }

    pub fn is_excluded(&self, row: usize, col: usize) -> bool {
        self.offset(row, col).map(|i| self.cells[i]).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, col: usize, excluded: bool) -> Result<(), GridError> {
        let i = self.offset(row, col)?;
        self.cells[i] = excluded;
        Ok(())
    }

    /// Flip one flag and return its new value
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let i = self.offset(row, col)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Excluded cells in row-major order
    pub fn excluded(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &flag)| flag)
            .map(move |(i, _)| (i / self.n_columns, i % self.n_columns))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&flag| flag).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
