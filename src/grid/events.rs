//! Change notifications emitted by the factor grid

use std::ops::Range;

/// Rectangular block of link-ratio coordinates whose derived values changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionChange {
    /// Origin rows affected (ultimate losses)
    pub rows: Range<usize>,

    /// Link columns affected (fitted, selected and cumulative factors)
    pub columns: Range<usize>,
}

/// Events delivered to observers, in the order they happen
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// An exclusion flag was set or cleared
    ExclusionChanged { row: usize, col: usize, excluded: bool },

    /// Selected factors in these columns were replaced
    SelectionChanged { columns: Range<usize> },

    /// The fitting average was changed
    AverageChanged,

    /// Recompute finished; everything in the region may have new values
    DerivedChanged(RegionChange),
}

/// Receives grid events synchronously, before the mutating call returns
pub trait GridObserver {
    fn on_event(&mut self, event: &GridEvent);
}

impl<F: FnMut(&GridEvent)> GridObserver for F {
    fn on_event(&mut self, event: &GridEvent) {
        self(event)
    }
}

/// Handle returned by `FactorGrid::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
