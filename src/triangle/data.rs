//! Triangle and link-ratio data structures

use crate::error::TriangleError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cumulative loss triangle indexed by (origin, development)
///
/// Each origin row is observed for a prefix of development periods; the
/// remaining cells (lower-right of the diagonal) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTriangle")]
pub struct Triangle {
    /// Origin period labels (rows), oldest first
    origins: Vec<String>,

    /// Development period labels (columns), earliest first
    developments: Vec<String>,

    /// Cumulative values, `values[origin][development]`
    values: Vec<Vec<Option<f64>>>,
}

impl Triangle {
    /// Build a triangle from a full rectangular grid of optional values
    pub fn new(
        origins: Vec<String>,
        developments: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, TriangleError> {
        if origins.is_empty() || developments.len() < 2 {
            return Err(TriangleError::TooSmall {
                origins: origins.len(),
                developments: developments.len(),
            });
        }

        if let Some(label) = first_duplicate(&origins) {
            return Err(TriangleError::DuplicateOrigin(label.to_string()));
        }
        if let Some(label) = first_duplicate(&developments) {
            return Err(TriangleError::DuplicateDevelopment(label.to_string()));
        }

        if values.len() != origins.len() {
            return Err(TriangleError::TooSmall {
                origins: values.len(),
                developments: developments.len(),
            });
        }

        for (origin, row) in origins.iter().zip(&values) {
            if row.len() != developments.len() {
                return Err(TriangleError::Shape {
                    origin: origin.clone(),
                    expected: developments.len(),
                    found: row.len(),
                });
            }

            let mut seen_gap = false;
            for (development, cell) in developments.iter().zip(row) {
                match cell {
                    Some(v) if !v.is_finite() => {
                        return Err(TriangleError::NonFinite {
                            origin: origin.clone(),
                            development: development.clone(),
                        });
                    }
                    Some(_) if seen_gap => {
                        return Err(TriangleError::Gap {
                            origin: origin.clone(),
                            development: development.clone(),
                        });
                    }
                    Some(_) => {}
                    None => seen_gap = true,
                }
            }
        }

        Ok(Self { origins, developments, values })
    }

    /// Build from data already known to be well formed (built-in samples)
    pub(crate) fn from_parts(
        origins: Vec<String>,
        developments: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    ) -> Self {
        Self { origins, developments, values }
    }

    /// Build a triangle from observed prefixes; short rows are unobserved past their end
    pub fn from_cumulative(
        origins: Vec<String>,
        developments: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, TriangleError> {
        let width = developments.len();
        let mut values = Vec::with_capacity(rows.len());
        for (origin, row) in origins.iter().zip(&rows) {
            if row.len() > width {
                return Err(TriangleError::Shape {
                    origin: origin.clone(),
                    expected: width,
                    found: row.len(),
                });
            }
            let mut padded: Vec<Option<f64>> = row.iter().map(|&v| Some(v)).collect();
            padded.resize(width, None);
            values.push(padded);
        }
        if rows.len() != origins.len() {
            return Err(TriangleError::TooSmall {
                origins: rows.len(),
                developments: width,
            });
        }
        Self::new(origins, developments, values)
    }

    pub fn n_origins(&self) -> usize {
        self.origins.len()
    }

    pub fn n_developments(&self) -> usize {
        self.developments.len()
    }

    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    pub fn developments(&self) -> &[String] {
        &self.developments
    }

    /// Observed value at (origin, development), `None` if outside or unobserved
    pub fn value(&self, origin: usize, development: usize) -> Option<f64> {
        self.values.get(origin)?.get(development).copied().flatten()
    }

    pub fn is_observed(&self, origin: usize, development: usize) -> bool {
        self.value(origin, development).is_some()
    }

    /// Index of the last observed development column for an origin row
    pub fn latest_column(&self, origin: usize) -> Option<usize> {
        self.values.get(origin)?.iter().rposition(Option::is_some)
    }

    /// Most recent observed value for an origin row
    pub fn latest(&self, origin: usize) -> Option<f64> {
        self.latest_column(origin).and_then(|col| self.value(origin, col))
    }

    /// Latest observed value of every origin row
    pub fn latest_diagonal(&self) -> Vec<Option<f64>> {
        (0..self.n_origins()).map(|i| self.latest(i)).collect()
    }

    /// Whether every development period of the row has been observed
    pub fn is_fully_developed(&self, origin: usize) -> bool {
        self.latest_column(origin) == Some(self.n_developments() - 1)
    }

    /// Labels of the link-ratio columns, e.g. "12-24"
    pub fn link_labels(&self) -> Vec<String> {
        self.developments
            .windows(2)
            .map(|pair| format!("{}-{}", pair[0], pair[1]))
            .collect()
    }

    /// Age-to-age ratios of consecutive development periods
    pub fn link_ratios(&self) -> LinkRatios {
        let ratios = self
            .values
            .iter()
            .map(|row| {
                row.windows(2)
                    .map(|pair| match (pair[0], pair[1]) {
                        (Some(from), Some(to)) if from != 0.0 => Some(to / from),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        LinkRatios {
            labels: self.link_labels(),
            ratios,
        }
    }
}

/// Grid of link ratios derived from a triangle
///
/// Shape is `n_origins x (n_developments - 1)`. Cells whose ratio cannot be
/// formed (unobserved or zero base) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRatios {
    labels: Vec<String>,
    ratios: Vec<Vec<Option<f64>>>,
}

impl LinkRatios {
    pub fn n_rows(&self) -> usize {
        self.ratios.len()
    }

    pub fn n_columns(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.ratios.get(row)?.get(col).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.ratios
    }

    /// All cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.ratios.iter().map(move |row| row.get(col).copied().flatten())
    }
}

fn first_duplicate(labels: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .find(|label| !seen.insert(label.as_str()))
        .map(String::as_str)
}

/// Unchecked serialized form; deserialization goes through `Triangle::new`
#[derive(Deserialize)]
struct RawTriangle {
    origins: Vec<String>,
    developments: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl TryFrom<RawTriangle> for Triangle {
    type Error = TriangleError;

    fn try_from(raw: RawTriangle) -> Result<Self, Self::Error> {
        Triangle::new(raw.origins, raw.developments, raw.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn small() -> Triangle {
        Triangle::from_cumulative(
            labels(&["2001", "2002", "2003"]),
            labels(&["12", "24", "36"]),
            vec![vec![100.0, 150.0, 165.0], vec![200.0, 280.0], vec![300.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_latest_diagonal() {
        let tri = small();
        assert_eq!(tri.latest_diagonal(), vec![Some(165.0), Some(280.0), Some(300.0)]);
        assert_eq!(tri.latest_column(1), Some(1));
        assert!(tri.is_fully_developed(0));
        assert!(!tri.is_fully_developed(2));
    }

    #[test]
    fn test_link_ratios_shape_and_values() {
        let tri = small();
        let links = tri.link_ratios();
        assert_eq!(links.n_rows(), 3);
        assert_eq!(links.n_columns(), 2);
        assert_eq!(links.labels(), &["12-24".to_string(), "24-36".to_string()]);
        assert!((links.get(0, 0).unwrap() - 1.5).abs() < 1e-12);
        assert!((links.get(0, 1).unwrap() - 1.1).abs() < 1e-12);
        assert!((links.get(1, 0).unwrap() - 1.4).abs() < 1e-12);
        assert_eq!(links.get(1, 1), None);
        assert_eq!(links.get(2, 0), None);
    }

    #[test]
    fn test_zero_base_has_no_ratio() {
        let tri = Triangle::from_cumulative(
            labels(&["A", "B"]),
            labels(&["1", "2"]),
            vec![vec![0.0, 10.0], vec![5.0]],
        )
        .unwrap();
        assert_eq!(tri.link_ratios().get(0, 0), None);
    }

    #[test]
    fn test_rejects_gap_in_row() {
        let err = Triangle::new(
            labels(&["A"]),
            labels(&["1", "2", "3"]),
            vec![vec![Some(1.0), None, Some(3.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, TriangleError::Gap { .. }));
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        let err = Triangle::from_cumulative(labels(&["A"]), labels(&["1"]), vec![vec![1.0]])
            .unwrap_err();
        assert!(matches!(err, TriangleError::TooSmall { .. }));

        let err = Triangle::from_cumulative(
            labels(&["A"]),
            labels(&["1", "2"]),
            vec![vec![1.0, 2.0, 3.0]],
        )
        .unwrap_err();
        assert!(matches!(err, TriangleError::Shape { .. }));
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let err = Triangle::from_cumulative(
            labels(&["2001", "2001"]),
            labels(&["12", "24"]),
            vec![vec![100.0, 150.0], vec![200.0]],
        )
        .unwrap_err();
        assert!(matches!(err, TriangleError::DuplicateOrigin(ref label) if label == "2001"));

        let err = Triangle::from_cumulative(
            labels(&["2001", "2002"]),
            labels(&["12", "12"]),
            vec![vec![100.0, 150.0], vec![200.0]],
        )
        .unwrap_err();
        assert!(matches!(err, TriangleError::DuplicateDevelopment(_)));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = serde_json::to_string(&small()).unwrap();
        let tri: Triangle = serde_json::from_str(&json).unwrap();
        assert_eq!(tri, small());

        let bad = r#"{"origins":["A"],"developments":[],"values":[[]]}"#;
        assert!(serde_json::from_str::<Triangle>(bad).is_err());

        let gap = r#"{"origins":["A"],"developments":["1","2","3"],"values":[[1.0,null,3.0]]}"#;
        assert!(serde_json::from_str::<Triangle>(gap).is_err());
    }
}
