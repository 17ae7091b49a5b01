//! Inventory of labelled LDF averages shown alongside the selected factors

use super::average::{AverageMethod, AverageSpec};
use serde::{Deserialize, Serialize};

/// One labelled average the user can check for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageEntry {
    pub label: String,
    pub spec: AverageSpec,
    #[serde(default)]
    pub checked: bool,
}

/// Ordered list of averages; entries are never reordered once added
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AverageCatalog {
    entries: Vec<AverageEntry>,
}

impl AverageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting inventory: all-year volume-weighted (checked) plus 3- and 5-year
    pub fn defaults() -> Self {
        let mut catalog = Self::new();
        let all = catalog.add("All-year volume-weighted", AverageSpec::all_years(AverageMethod::Volume));
        catalog.set_checked(all, true);
        catalog.add("3-year volume-weighted", AverageSpec::latest(AverageMethod::Volume, 3));
        catalog.add("5-year volume-weighted", AverageSpec::latest(AverageMethod::Volume, 5));
        catalog
    }

    /// Append an average; an empty label falls back to the average's description
    pub fn add(&mut self, label: &str, spec: AverageSpec) -> usize {
        let label = if label.trim().is_empty() {
            spec.describe()
        } else {
            label.trim().to_string()
        };
        self.entries.push(AverageEntry {
            label,
            spec,
            checked: false,
        });
        self.entries.len() - 1
    }

    /// Flip the checked flag; returns the new state, or `None` for a bad index
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.checked = !entry.checked;
        Some(entry.checked)
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[AverageEntry] {
        &self.entries
    }

    pub fn checked(&self) -> impl Iterator<Item = &AverageEntry> {
        self.entries.iter().filter(|e| e.checked)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let catalog = AverageCatalog::defaults();
        assert_eq!(catalog.len(), 3);
        let checked: Vec<_> = catalog.checked().map(|e| e.label.as_str()).collect();
        assert_eq!(checked, vec!["All-year volume-weighted"]);
    }

    #[test]
    fn test_add_and_toggle() {
        let mut catalog = AverageCatalog::new();
        let idx = catalog.add("  ", AverageSpec::latest(AverageMethod::Geometric, 4));
        assert_eq!(catalog.entries()[idx].label, "4-year geometric");
        assert_eq!(catalog.toggle(idx), Some(true));
        assert_eq!(catalog.checked().count(), 1);
        assert_eq!(catalog.toggle(idx), Some(false));
        assert_eq!(catalog.toggle(7), None);
        assert!(!catalog.set_checked(7, true));
    }
}
