//! Factor grid engine
//!
//! Owns the triangle, its link ratios, the exclusion mask and the selected
//! LDF row. Every mutating call refits the LDFs and rebuilds the CDF row and
//! ultimate losses from scratch before returning, then notifies observers.

use super::config::{BlankFactorPolicy, EngineConfig, InvalidEntryPolicy};
use super::events::{GridEvent, GridObserver, ObserverId, RegionChange};
use super::mask::ExclusionMask;
use crate::development::{AverageCatalog, AverageSpec, ChainLadderFitter, DropCell, FactorFitter};
use crate::error::GridError;
use crate::triangle::{LinkRatios, Triangle};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable factor grid over one triangle
pub struct FactorGrid<F: FactorFitter = ChainLadderFitter> {
    triangle: Triangle,
    link_ratios: LinkRatios,
    exclusions: ExclusionMask,

    /// User selections; blank until selected or overridden
    selected: Vec<Option<f64>>,

    // Derived on every recompute
    fitted: Vec<Option<f64>>,
    cdfs: Vec<Option<f64>>,
    ultimates: Vec<Option<f64>>,
    drop_list: Vec<DropCell>,

    config: EngineConfig,
    fitter: F,
    observers: Vec<(ObserverId, Box<dyn GridObserver>)>,
    next_observer: u64,
}

/// Serializable copy of every row the grid exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub origins: Vec<String>,
    pub link_labels: Vec<String>,
    pub ratios: Vec<Vec<Option<f64>>>,
    pub excluded: Vec<(usize, usize)>,
    pub average: String,
    pub fitted: Vec<Option<f64>>,
    pub selected: Vec<Option<f64>>,
    pub cdfs: Vec<Option<f64>>,
    pub ultimates: Vec<Option<f64>>,
}

impl FactorGrid<ChainLadderFitter> {
    /// Grid with default configuration and chain-ladder fitting
    pub fn new(triangle: Triangle) -> Self {
        Self::with_config(triangle, EngineConfig::default())
    }

    pub fn with_config(triangle: Triangle, config: EngineConfig) -> Self {
        Self::with_fitter(triangle, config, ChainLadderFitter)
    }
}

impl<F: FactorFitter> FactorGrid<F> {
    /// Grid using a custom fitting service
    pub fn with_fitter(triangle: Triangle, config: EngineConfig, fitter: F) -> Self {
        let link_ratios = triangle.link_ratios();
        let n_rows = link_ratios.n_rows();
        let n_columns = link_ratios.n_columns();

        let mut grid = Self {
            triangle,
            link_ratios,
            exclusions: ExclusionMask::new(n_rows, n_columns),
            selected: vec![None; n_columns],
            fitted: vec![None; n_columns],
            cdfs: vec![None; n_columns],
            ultimates: vec![None; n_rows],
            drop_list: Vec::new(),
            config,
            fitter,
            observers: Vec::new(),
            next_observer: 0,
        };
        grid.recompute();
        grid
    }

    // ---- Accessors ----

    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    pub fn link_ratios(&self) -> &LinkRatios {
        &self.link_ratios
    }

    pub fn exclusions(&self) -> &ExclusionMask {
        &self.exclusions
    }

    pub fn fitted(&self) -> &[Option<f64>] {
        &self.fitted
    }

    pub fn selected(&self) -> &[Option<f64>] {
        &self.selected
    }

    pub fn cdfs(&self) -> &[Option<f64>] {
        &self.cdfs
    }

    pub fn ultimates(&self) -> &[Option<f64>] {
        &self.ultimates
    }

    pub fn drop_list(&self) -> &[DropCell] {
        &self.drop_list
    }

    pub fn average(&self) -> &AverageSpec {
        &self.config.average
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of origin rows in the link-ratio grid
    pub fn n_rows(&self) -> usize {
        self.link_ratios.n_rows()
    }

    /// Number of link (development) columns
    pub fn n_columns(&self) -> usize {
        self.link_ratios.n_columns()
    }

    pub fn is_selection_blank(&self) -> bool {
        self.selected.iter().all(Option::is_none)
    }

    /// Column for a link label ("12-24") or the development label it starts from ("12")
    pub fn column_index(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.link_ratios
            .labels()
            .iter()
            .position(|l| l == label)
            .or_else(|| {
                self.triangle.developments()[..self.n_columns()]
                    .iter()
                    .position(|d| d == label)
            })
    }

    /// Grid coordinates of a link ratio given its origin and development labels
    pub fn locate(&self, origin: &str, development: &str) -> Option<(usize, usize)> {
        let row = self.triangle.origins().iter().position(|o| o == origin.trim())?;
        let col = self.column_index(development)?;
        Some((row, col))
    }

    // ---- Observers ----

    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer; returns false if it was not subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: GridEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    // ---- Mutations ----

    /// Flip the exclusion flag of one link ratio
    ///
    /// A selection that was copied from the fit is left as it was; the user
    /// has to select again to pick up the refitted factor.
    pub fn toggle_exclusion(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let excluded = self.exclusions.toggle(row, col)?;
        self.notify(GridEvent::ExclusionChanged { row, col, excluded });
        self.recompute();
        Ok(())
    }

    pub fn set_exclusion(&mut self, row: usize, col: usize, excluded: bool) -> Result<(), GridError> {
        self.exclusions.set(row, col, excluded)?;
        self.notify(GridEvent::ExclusionChanged { row, col, excluded });
        self.recompute();
        Ok(())
    }

    /// Copy one fitted LDF into the selected row
    pub fn select_fitted_factor(&mut self, col: usize) -> Result<(), GridError> {
        self.check_column(col)?;
        self.selected[col] = self.fitted[col];
        self.selection_changed(col..col + 1);
        Ok(())
    }

    /// Copy the whole fitted row into the selected row
    pub fn select_fitted_row(&mut self) {
        self.selected = self.fitted.clone();
        self.selection_changed(0..self.n_columns());
    }

    /// Set a selected factor from user-typed text
    ///
    /// Empty text blanks the column. Text that is not a finite number is
    /// handled per `InvalidEntryPolicy`.
    pub fn override_factor(&mut self, col: usize, text: &str) -> Result<(), GridError> {
        self.check_column(col)?;
        let trimmed = text.trim();
        let value = if trimmed.is_empty() {
            None
        } else {
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => self.invalid_entry(col, trimmed)?,
            }
        };
        self.selected[col] = value;
        self.selection_changed(col..col + 1);
        Ok(())
    }

    /// Typed form of `override_factor`
    pub fn set_factor(&mut self, col: usize, value: Option<f64>) -> Result<(), GridError> {
        self.check_column(col)?;
        let value = match value {
            Some(v) if !v.is_finite() => self.invalid_entry(col, &v.to_string())?,
            other => other,
        };
        self.selected[col] = value;
        self.selection_changed(col..col + 1);
        Ok(())
    }

    /// Blank one selected factor, leaving the other columns alone
    pub fn delete_factor(&mut self, col: usize) -> Result<(), GridError> {
        self.check_column(col)?;
        self.selected[col] = None;
        self.selection_changed(col..col + 1);
        Ok(())
    }

    /// Blank every selected factor
    pub fn clear_selection(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = None);
        self.selection_changed(0..self.n_columns());
    }

    /// Change the average behind the fitted LDF row
    pub fn set_average(&mut self, average: AverageSpec) {
        self.config.average = average;
        self.notify(GridEvent::AverageChanged);
        self.recompute();
    }

    fn selection_changed(&mut self, columns: std::ops::Range<usize>) {
        self.notify(GridEvent::SelectionChanged { columns });
        self.recompute();
    }

    fn check_column(&self, col: usize) -> Result<(), GridError> {
        if col >= self.n_columns() {
            return Err(GridError::ColumnOutOfBounds {
                col,
                cols: self.n_columns(),
            });
        }
        Ok(())
    }

    fn invalid_entry(&self, col: usize, text: &str) -> Result<Option<f64>, GridError> {
        match self.config.invalid_entry {
            InvalidEntryPolicy::Blank => {
                warn!("Factor '{}' in column {} is not a number; storing blank", text, col);
                Ok(None)
            }
            InvalidEntryPolicy::Reject => Err(GridError::InvalidFactor {
                col,
                text: text.to_string(),
            }),
        }
    }

    // ---- Recompute ----

    /// Rebuild every derived row from the triangle, mask and selections
    pub fn recompute(&mut self) {
        self.drop_list = self.build_drop_list();
        self.fitted = self
            .fitter
            .fit(&self.triangle, &self.drop_list, &self.config.average);

        if self.is_selection_blank() {
            self.cdfs = vec![None; self.n_columns()];
            self.ultimates = vec![None; self.n_rows()];
        } else {
            let factors = self.effective_factors();
            let projection = self.fitter.develop(&self.triangle, &factors);
            self.cdfs = projection.cdfs;
            self.ultimates = projection.ultimates;
        }

        debug!(
            "Recomputed factor grid: {} excluded, {} of {} columns selected",
            self.drop_list.len(),
            self.selected.iter().filter(|s| s.is_some()).count(),
            self.n_columns()
        );

        let region = RegionChange {
            rows: 0..self.n_rows(),
            columns: 0..self.n_columns(),
        };
        self.notify(GridEvent::DerivedChanged(region));
    }

    fn build_drop_list(&self) -> Vec<DropCell> {
        let origins = self.triangle.origins();
        let developments = self.triangle.developments();
        self.exclusions
            .excluded()
            .map(|(row, col)| DropCell::new(origins[row].clone(), developments[col].clone()))
            .collect()
    }

    /// Selected factor where present, otherwise per `BlankFactorPolicy`
    fn effective_factors(&self) -> Vec<Option<f64>> {
        self.selected
            .iter()
            .zip(&self.fitted)
            .map(|(selected, fitted)| match (selected, self.config.blank_factor) {
                (Some(v), _) => Some(*v),
                (None, BlankFactorPolicy::Fitted) => *fitted,
                (None, BlankFactorPolicy::Propagate) => None,
            })
            .collect()
    }

    // ---- Read-only extras ----

    /// Fit the current link ratios and exclusions with another average
    pub fn fit_with(&self, average: &AverageSpec) -> Vec<Option<f64>> {
        self.fitter.fit(&self.triangle, &self.drop_list, average)
    }

    /// One fitted row per checked catalog entry, labelled
    pub fn fit_checked(&self, catalog: &AverageCatalog) -> Vec<(String, Vec<Option<f64>>)> {
        catalog
            .checked()
            .map(|entry| (entry.label.clone(), self.fit_with(&entry.spec)))
            .collect()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            origins: self.triangle.origins().to_vec(),
            link_labels: self.link_ratios.labels().to_vec(),
            ratios: self.link_ratios.rows().to_vec(),
            excluded: self.exclusions.excluded().collect(),
            average: self.config.average.describe(),
            fitted: self.fitted.clone(),
            selected: self.selected.clone(),
            cdfs: self.cdfs.clone(),
            ultimates: self.ultimates.clone(),
        }
    }
}

impl<F: FactorFitter> fmt::Debug for FactorGrid<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactorGrid")
            .field("origins", &self.triangle.n_origins())
            .field("columns", &self.n_columns())
            .field("excluded", &self.exclusions.count())
            .field("selected", &self.selected)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::development::AverageMethod;
    use crate::triangle::sample;
    use approx::assert_relative_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// 3 origins x 3 developments
    fn small() -> Triangle {
        Triangle::from_cumulative(
            labels(&["2001", "2002", "2003"]),
            labels(&["12", "24", "36"]),
            vec![vec![100.0, 150.0, 165.0], vec![200.0, 280.0], vec![300.0]],
        )
        .unwrap()
    }

    /// 4 origins x 4 developments
    fn medium() -> Triangle {
        Triangle::from_cumulative(
            labels(&["2001", "2002", "2003", "2004"]),
            labels(&["12", "24", "36", "48"]),
            vec![
                vec![100.0, 200.0, 240.0, 252.0],
                vec![110.0, 231.0, 270.0],
                vec![120.0, 300.0],
                vec![130.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_starts_blank() {
        let grid = FactorGrid::new(small());
        assert!(grid.is_selection_blank());
        assert_eq!(grid.cdfs(), &[None, None]);
        assert_eq!(grid.ultimates(), &[None, None, None]);
        assert_relative_eq!(grid.fitted()[0].unwrap(), 430.0 / 300.0, epsilon = 1e-12);
        assert_relative_eq!(grid.fitted()[1].unwrap(), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut grid = FactorGrid::new(sample::raa());
        grid.toggle_exclusion(1, 0).unwrap();
        grid.select_fitted_row();
        grid.override_factor(3, "1.2").unwrap();

        let before = grid.snapshot();
        grid.recompute();
        grid.recompute();
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn test_exclusion_only_refits_its_column() {
        let mut grid = FactorGrid::new(sample::raa());
        let base = grid.fitted().to_vec();

        for row in [0, 3, 5] {
            grid.toggle_exclusion(row, 2).unwrap();
            for col in (0..grid.n_columns()).filter(|&c| c != 2) {
                assert_eq!(grid.fitted()[col], base[col], "column {} moved", col);
            }
        }
        assert_ne!(grid.fitted()[2], base[2]);
    }

    #[test]
    fn test_exclusion_does_not_resync_selection() {
        let mut grid = FactorGrid::new(small());
        grid.select_fitted_row();
        let selected = grid.selected().to_vec();

        grid.toggle_exclusion(0, 0).unwrap();
        assert_eq!(grid.selected(), selected.as_slice());
        assert_ne!(grid.fitted()[0], selected[0]);
    }

    #[test]
    fn test_clear_blanks_cdfs_and_ultimates() {
        let mut grid = FactorGrid::new(medium());
        grid.select_fitted_row();
        assert!(grid.cdfs().iter().all(Option::is_some));

        grid.clear_selection();
        assert!(grid.cdfs().iter().all(Option::is_none));
        assert!(grid.ultimates().iter().all(Option::is_none));
    }

    #[test]
    fn test_cumulative_composition() {
        let mut grid = FactorGrid::new(medium());
        grid.override_factor(0, "2.0").unwrap();
        grid.override_factor(1, "1.2").unwrap();
        grid.override_factor(2, "1.05").unwrap();

        let cdfs = grid.cdfs();
        assert_relative_eq!(cdfs[2].unwrap(), 1.05, epsilon = 1e-12);
        assert_relative_eq!(cdfs[1].unwrap(), 1.2 * 1.05, epsilon = 1e-12);
        assert_relative_eq!(cdfs[0].unwrap(), 2.0 * 1.2 * 1.05, epsilon = 1e-12);

        let ultimates = grid.ultimates();
        assert_relative_eq!(ultimates[0].unwrap(), 252.0, epsilon = 1e-9);
        assert_relative_eq!(ultimates[1].unwrap(), 270.0 * 1.05, epsilon = 1e-9);
        assert_relative_eq!(ultimates[2].unwrap(), 300.0 * 1.2 * 1.05, epsilon = 1e-9);
        assert_relative_eq!(ultimates[3].unwrap(), 130.0 * 2.0 * 1.2 * 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_override_then_reselect_restores_fit() {
        let mut grid = FactorGrid::new(small());
        grid.override_factor(1, "1.5").unwrap();
        assert_eq!(grid.selected()[1], Some(1.5));

        grid.clear_selection();
        grid.select_fitted_row();
        assert_eq!(grid.selected()[1], grid.fitted()[1]);
        assert_relative_eq!(grid.selected()[1].unwrap(), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_small_triangle_exclusion_scenario() {
        let mut grid = FactorGrid::new(small());
        grid.toggle_exclusion(0, 0).unwrap();
        grid.select_fitted_row();

        // Only origin 2002 contributes to 12-24 now
        assert_relative_eq!(grid.fitted()[0].unwrap(), 1.4, epsilon = 1e-12);
        assert_eq!(grid.drop_list(), &[DropCell::new("2001", "12")]);

        let cdfs = grid.cdfs();
        assert_relative_eq!(cdfs[0].unwrap(), 1.4 * 1.1, epsilon = 1e-12);
        assert_relative_eq!(grid.ultimates()[0].unwrap(), 165.0, epsilon = 1e-9);
        assert_relative_eq!(grid.ultimates()[2].unwrap(), 300.0 * 1.4 * 1.1, epsilon = 1e-9);
    }

    #[test]
    fn test_medium_triangle_exclusion_scenario() {
        let mut grid = FactorGrid::new(medium());
        grid.toggle_exclusion(0, 0).unwrap();
        grid.select_fitted_row();

        assert_relative_eq!(grid.fitted()[0].unwrap(), 531.0 / 230.0, epsilon = 1e-12);
        let expected_cdf0 = grid.fitted()[0].unwrap() * grid.cdfs()[1].unwrap();
        assert_relative_eq!(grid.cdfs()[0].unwrap(), expected_cdf0, epsilon = 1e-12);
        assert_relative_eq!(grid.ultimates()[3].unwrap(), 130.0 * expected_cdf0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_numeric_override_is_blank() {
        let mut grid = FactorGrid::new(small());
        grid.select_fitted_row();
        assert!(grid.override_factor(1, "abc").is_ok());
        assert_eq!(grid.selected()[1], None);
        assert!(grid.selected()[0].is_some());

        assert!(grid.override_factor(0, "NaN").is_ok());
        assert_eq!(grid.selected()[0], None);
    }

    #[test]
    fn test_strict_config_rejects_bad_override() {
        let mut grid = FactorGrid::with_config(small(), EngineConfig::strict());
        grid.override_factor(1, "1.2").unwrap();

        let err = grid.override_factor(1, "abc").unwrap_err();
        assert_eq!(err, GridError::InvalidFactor { col: 1, text: "abc".into() });
        assert_eq!(grid.selected()[1], Some(1.2));

        assert!(grid.set_factor(1, Some(f64::INFINITY)).is_err());
        assert!(grid.override_factor(1, "  ").is_ok());
        assert_eq!(grid.selected()[1], None);
    }

    #[test]
    fn test_blank_factor_policies() {
        let mut fitted = FactorGrid::new(small());
        fitted.override_factor(1, "1.2").unwrap();
        let expected = fitted.fitted()[0].unwrap() * 1.2;
        assert_relative_eq!(fitted.cdfs()[0].unwrap(), expected, epsilon = 1e-12);

        let mut propagate = FactorGrid::with_config(small(), EngineConfig::strict());
        propagate.override_factor(1, "1.2").unwrap();
        assert_eq!(propagate.cdfs()[0], None);
        assert_relative_eq!(propagate.cdfs()[1].unwrap(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(propagate.ultimates()[0].unwrap(), 165.0, epsilon = 1e-9);
        assert_relative_eq!(propagate.ultimates()[1].unwrap(), 280.0 * 1.2, epsilon = 1e-9);
        assert_eq!(propagate.ultimates()[2], None);
    }

    #[test]
    fn test_blank_final_factor_uses_unity() {
        let mut grid = FactorGrid::new(sample::raa());
        grid.toggle_exclusion(0, 8).unwrap();
        grid.select_fitted_row();
        assert_eq!(grid.fitted()[8], None);
        assert_eq!(grid.cdfs()[8], Some(1.0));
        assert_relative_eq!(grid.cdfs()[7].unwrap(), grid.fitted()[7].unwrap(), epsilon = 1e-12);
        assert!(grid.cdfs().iter().all(Option::is_some));
        assert!(grid.ultimates().iter().all(Option::is_some));

        let mut strict = FactorGrid::with_config(sample::raa(), EngineConfig::strict());
        strict.select_fitted_row();
        strict.delete_factor(8).unwrap();
        assert_eq!(strict.cdfs()[8], Some(1.0));
        assert_relative_eq!(strict.cdfs()[7].unwrap(), strict.selected()[7].unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_delete_factor_keeps_other_columns() {
        let mut grid = FactorGrid::new(medium());
        grid.select_fitted_row();
        grid.delete_factor(1).unwrap();
        assert_eq!(grid.selected()[1], None);
        assert!(grid.selected()[0].is_some());
        assert!(grid.selected()[2].is_some());
    }

    #[test]
    fn test_select_single_factor() {
        let mut grid = FactorGrid::new(medium());
        grid.select_fitted_factor(2).unwrap();
        assert_eq!(grid.selected()[2], grid.fitted()[2]);
        assert_eq!(grid.selected()[0], None);
    }

    #[test]
    fn test_bounds_are_reported() {
        let mut grid = FactorGrid::new(small());
        assert!(matches!(
            grid.toggle_exclusion(3, 0),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(
            grid.select_fitted_factor(2),
            Err(GridError::ColumnOutOfBounds { col: 2, cols: 2 })
        );
        assert!(grid.override_factor(5, "1.0").is_err());
        assert!(grid.delete_factor(5).is_err());
    }

    #[test]
    fn test_set_average() {
        let mut grid = FactorGrid::new(small());
        grid.set_average(AverageSpec::all_years(AverageMethod::Straight));
        assert_relative_eq!(grid.fitted()[0].unwrap(), 1.45, epsilon = 1e-12);
        assert_eq!(grid.average().method, AverageMethod::Straight);
    }

    #[test]
    fn test_fit_checked_catalog() {
        let grid = FactorGrid::new(sample::raa());
        let mut catalog = AverageCatalog::defaults();
        catalog.set_checked(1, true);

        let rows = grid.fit_checked(&catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, grid.fitted().to_vec());
        assert_eq!(rows[1].0, "3-year volume-weighted");
        assert_ne!(rows[1].1[0], grid.fitted()[0]);
    }

    #[test]
    fn test_locate_by_labels() {
        let grid = FactorGrid::new(small());
        assert_eq!(grid.locate("2002", "12"), Some((1, 0)));
        assert_eq!(grid.locate("2002", "24-36"), Some((1, 1)));
        assert_eq!(grid.locate("2002", "36"), None);
        assert_eq!(grid.locate("1999", "12"), None);
    }

    #[test]
    fn test_observers_see_full_region() {
        let mut grid = FactorGrid::new(small());
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = grid.subscribe(Box::new(move |event: &GridEvent| {
            sink.borrow_mut().push(event.clone());
        }));

        grid.toggle_exclusion(1, 0).unwrap();
        assert_eq!(
            *events.borrow(),
            vec![
                GridEvent::ExclusionChanged { row: 1, col: 0, excluded: true },
                GridEvent::DerivedChanged(RegionChange { rows: 0..3, columns: 0..2 }),
            ]
        );

        events.borrow_mut().clear();
        grid.override_factor(1, "1.3").unwrap();
        assert_eq!(events.borrow()[0], GridEvent::SelectionChanged { columns: 1..2 });

        assert!(grid.unsubscribe(id));
        assert!(!grid.unsubscribe(id));
        events.borrow_mut().clear();
        grid.clear_selection();
        assert!(events.borrow().is_empty());
    }
}
