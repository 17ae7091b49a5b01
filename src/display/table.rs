//! Factor table layout over a factor grid
//!
//! Rows, top to bottom:
//! - one row per origin holding its link ratios and ultimate loss
//! - blank spacer
//! - fitted LDFs
//! - blank spacer
//! - selected LDFs (the only editable row)
//! - CDFs to ultimate
//!
//! Columns: one per link ratio, a blank spacer, then "Ultimate Loss".

use super::clipboard::copy_region;
use super::format::DisplayConfig;
use crate::development::FactorFitter;
use crate::error::GridError;
use crate::grid::FactorGrid;

/// Corner label above the origin headers
pub const ORIGIN_CORNER_LABEL: &str = "AY";
pub const SELECTED_ROW_LABEL: &str = "Selected LDF";
pub const CDF_ROW_LABEL: &str = "CDF to Ultimate";
pub const ULTIMATE_COLUMN_LABEL: &str = "Ultimate Loss";

/// Non-origin rows following the origin block
const TRAILING_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Origin(usize),
    TriangleSpacer,
    Fitted,
    SelectedSpacer,
    Selected,
    Cdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Link(usize),
    Spacer,
    Ultimate,
}

/// Background class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Observed part of the triangle
    Triangle,
    /// Observed link ratio that is excluded from fitting
    Excluded,
    /// Not yet observed, or structural filler
    LowerDiagonal,
    /// Factor rows
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Background,
    pub strike_out: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCell {
    pub text: String,
    pub style: CellStyle,
    pub editable: bool,
}

/// Display-coordinate view of a factor grid
#[derive(Debug, Clone)]
pub struct FactorTable {
    n_origins: usize,
    n_links: usize,
    config: DisplayConfig,
}

impl FactorTable {
    pub fn new<F: FactorFitter>(grid: &FactorGrid<F>, config: DisplayConfig) -> Self {
        Self {
            n_origins: grid.n_rows(),
            n_links: grid.n_columns(),
            config,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.n_origins + TRAILING_ROWS
    }

    pub fn column_count(&self) -> usize {
        self.n_links + 2
    }

    pub fn fitted_row(&self) -> usize {
        self.n_origins + 1
    }

    pub fn selected_row(&self) -> usize {
        self.n_origins + 3
    }

    pub fn cdf_row(&self) -> usize {
        self.n_origins + 4
    }

    pub fn row_kind(&self, row: usize) -> Option<RowKind> {
        if row < self.n_origins {
            return Some(RowKind::Origin(row));
        }
        match row - self.n_origins {
            0 => Some(RowKind::TriangleSpacer),
            1 => Some(RowKind::Fitted),
            2 => Some(RowKind::SelectedSpacer),
            3 => Some(RowKind::Selected),
            4 => Some(RowKind::Cdf),
            _ => None,
        }
    }

    pub fn column_kind(&self, col: usize) -> Option<ColumnKind> {
        if col < self.n_links {
            Some(ColumnKind::Link(col))
        } else if col == self.n_links {
            Some(ColumnKind::Spacer)
        } else if col == self.n_links + 1 {
            Some(ColumnKind::Ultimate)
        } else {
            None
        }
    }

    pub fn row_header<F: FactorFitter>(&self, grid: &FactorGrid<F>, row: usize) -> Option<String> {
        let header = match self.row_kind(row)? {
            RowKind::Origin(i) => grid.triangle().origins()[i].clone(),
            RowKind::TriangleSpacer | RowKind::SelectedSpacer => String::new(),
            RowKind::Fitted => grid.average().row_label(),
            RowKind::Selected => SELECTED_ROW_LABEL.to_string(),
            RowKind::Cdf => CDF_ROW_LABEL.to_string(),
        };
        Some(header)
    }

    pub fn column_header<F: FactorFitter>(&self, grid: &FactorGrid<F>, col: usize) -> Option<String> {
        let header = match self.column_kind(col)? {
            ColumnKind::Link(j) => grid.link_ratios().labels()[j].clone(),
            ColumnKind::Spacer => String::new(),
            ColumnKind::Ultimate => ULTIMATE_COLUMN_LABEL.to_string(),
        };
        Some(header)
    }

    /// Display text, style and editability of one cell; `None` outside the table
    pub fn cell<F: FactorFitter>(&self, grid: &FactorGrid<F>, row: usize, col: usize) -> Option<DisplayCell> {
        let row_kind = self.row_kind(row)?;
        let col_kind = self.column_kind(col)?;
        let blank = || self.config.blank_text.clone();

        let mut style = CellStyle {
            background: Background::LowerDiagonal,
            strike_out: false,
        };
        let mut editable = false;

        let text = match (row_kind, col_kind) {
            (RowKind::Origin(i), ColumnKind::Link(j)) => {
                // Ratio j needs development j + 1 to be observed
                if grid.triangle().is_observed(i, j + 1) {
                    let excluded = grid.exclusions().is_excluded(i, j);
                    style.background = if excluded {
                        Background::Excluded
                    } else {
                        Background::Triangle
                    };
                    style.strike_out = excluded;
                    self.config.ratio(grid.link_ratios().get(i, j))
                } else {
                    blank()
                }
            }
            (RowKind::Origin(i), ColumnKind::Ultimate) => {
                style.background = Background::Triangle;
                self.config.value(grid.ultimates()[i])
            }
            (RowKind::Fitted, ColumnKind::Link(j)) => {
                style.background = Background::Plain;
                self.config.ratio(grid.fitted()[j])
            }
            (RowKind::Selected, ColumnKind::Link(j)) => {
                style.background = Background::Plain;
                editable = true;
                self.config.ratio(grid.selected()[j])
            }
            (RowKind::Cdf, ColumnKind::Link(j)) => {
                style.background = Background::Plain;
                if grid.is_selection_blank() {
                    blank()
                } else {
                    self.config.ratio(grid.cdfs()[j])
                }
            }
            // Spacers, the spacer column and the ultimate column below the origins
            _ => blank(),
        };

        Some(DisplayCell { text, style, editable })
    }

    /// Display text of one cell; empty outside the table
    pub fn text<F: FactorFitter>(&self, grid: &FactorGrid<F>, row: usize, col: usize) -> String {
        self.cell(grid, row, col).map(|c| c.text).unwrap_or_default()
    }

    pub fn is_editable(&self, row: usize, col: usize) -> bool {
        matches!(
            (self.row_kind(row), self.column_kind(col)),
            (Some(RowKind::Selected), Some(ColumnKind::Link(_)))
        )
    }

    // ---- Gesture routing ----

    /// Double-click on a cell: toggle a ratio's exclusion or select a fitted LDF
    ///
    /// Returns whether the grid was changed.
    pub fn double_click<F: FactorFitter>(
        &self,
        grid: &mut FactorGrid<F>,
        row: usize,
        col: usize,
    ) -> Result<bool, GridError> {
        match (self.row_kind(row), self.column_kind(col)) {
            (Some(RowKind::Origin(i)), Some(ColumnKind::Link(j))) => {
                if !grid.triangle().is_observed(i, j + 1) {
                    return Ok(false);
                }
                grid.toggle_exclusion(i, j)?;
                Ok(true)
            }
            (Some(RowKind::Fitted), Some(ColumnKind::Link(j))) => {
                grid.select_fitted_factor(j)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Double-click on a row header: the fitted row selects all, the selected row clears
    pub fn header_double_click<F: FactorFitter>(
        &self,
        grid: &mut FactorGrid<F>,
        row: usize,
    ) -> Result<bool, GridError> {
        match self.row_kind(row) {
            Some(RowKind::Fitted) => {
                grid.select_fitted_row();
                Ok(true)
            }
            Some(RowKind::Selected) => {
                grid.clear_selection();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Commit typed text into an editable cell
    pub fn edit<F: FactorFitter>(
        &self,
        grid: &mut FactorGrid<F>,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<bool, GridError> {
        match (self.row_kind(row), self.column_kind(col)) {
            (Some(RowKind::Selected), Some(ColumnKind::Link(j))) => {
                grid.override_factor(j, text)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Delete key over a selection: blanks the selected LDFs it covers
    ///
    /// Returns how many selected factors were deleted.
    pub fn delete_cells<F: FactorFitter>(
        &self,
        grid: &mut FactorGrid<F>,
        cells: &[(usize, usize)],
    ) -> Result<usize, GridError> {
        let mut deleted = 0;
        for &(row, col) in cells {
            if let (Some(RowKind::Selected), Some(ColumnKind::Link(j))) =
                (self.row_kind(row), self.column_kind(col))
            {
                grid.delete_factor(j)?;
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    /// Whether a context menu over this selection should offer deletion
    pub fn selection_has_deletable(&self, cells: &[(usize, usize)]) -> bool {
        cells.iter().any(|&(row, _)| row == self.selected_row())
    }

    /// Tab-separated text of the selection's bounding rectangle
    pub fn copy<F: FactorFitter>(
        &self,
        grid: &FactorGrid<F>,
        cells: &[(usize, usize)],
    ) -> Result<String, csv::Error> {
        copy_region(cells, |row, col| self.text(grid, row, col))
    }

    /// Every cell as text, with a header row and a leading row-header column
    pub fn render<F: FactorFitter>(&self, grid: &FactorGrid<F>) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.row_count() + 1);

        let mut header = vec![ORIGIN_CORNER_LABEL.to_string()];
        header.extend((0..self.column_count()).filter_map(|c| self.column_header(grid, c)));
        rows.push(header);

        for r in 0..self.row_count() {
            let mut line = vec![self.row_header(grid, r).unwrap_or_default()];
            line.extend((0..self.column_count()).map(|c| self.text(grid, r, c)));
            rows.push(line);
        }
        rows
    }
}
