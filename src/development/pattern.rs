//! Cumulative development from explicit age-to-age factors

use crate::triangle::Triangle;
use serde::{Deserialize, Serialize};

/// Explicit age-to-age factors, one per link column
#[derive(Debug, Clone, PartialEq)]
pub struct DevelopmentPattern {
    ldfs: Vec<Option<f64>>,
}

/// CDFs and ultimate losses produced from a development pattern
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Projection {
    /// Cumulative factor to ultimate for each link column
    pub cdfs: Vec<Option<f64>>,

    /// Projected ultimate loss for each origin row
    pub ultimates: Vec<Option<f64>>,
}

impl DevelopmentPattern {
    pub fn new(ldfs: Vec<Option<f64>>) -> Self {
        Self { ldfs }
    }

    pub fn ldfs(&self) -> &[Option<f64>] {
        &self.ldfs
    }

    /// Right-to-left cumulative product of the factors
    ///
    /// A blank final factor counts as 1.0. Any other blank factor blanks its
    /// own CDF and every CDF to its left.
    pub fn cdfs(&self) -> Vec<Option<f64>> {
        let last = self.ldfs.len().saturating_sub(1);
        let mut cdfs = vec![None; self.ldfs.len()];
        let mut running = Some(1.0);
        for (col, ldf) in self.ldfs.iter().enumerate().rev() {
            let ldf = if col == last { ldf.or(Some(1.0)) } else { *ldf };
            running = match (running, ldf) {
                (Some(acc), Some(f)) => Some(acc * f),
                _ => None,
            };
            cdfs[col] = running;
        }
        cdfs
    }

    /// CDF that applies to a value observed at `development`
    ///
    /// The final development period has a tail of 1.0.
    pub fn cdf_from(&self, cdfs: &[Option<f64>], development: usize) -> Option<f64> {
        if development >= self.ldfs.len() {
            Some(1.0)
        } else {
            cdfs.get(development).copied().flatten()
        }
    }

    /// Ultimate loss per origin: latest diagonal times the CDF at its age
    pub fn project(&self, triangle: &Triangle) -> Projection {
        let cdfs = self.cdfs();
        let ultimates = (0..triangle.n_origins())
            .map(|row| {
                let latest = triangle.latest(row)?;
                let development = triangle.latest_column(row)?;
                Some(latest * self.cdf_from(&cdfs, development)?)
            })
            .collect();

        Projection { cdfs, ultimates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small() -> Triangle {
        Triangle::from_cumulative(
            vec!["2001".into(), "2002".into(), "2003".into()],
            vec!["12".into(), "24".into(), "36".into()],
            vec![vec![100.0, 150.0, 165.0], vec![200.0, 280.0], vec![300.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_cumulative_product() {
        let pattern = DevelopmentPattern::new(vec![Some(2.0), Some(1.5), Some(1.1)]);
        let cdfs = pattern.cdfs();
        assert_relative_eq!(cdfs[2].unwrap(), 1.1, epsilon = 1e-12);
        assert_relative_eq!(cdfs[1].unwrap(), 1.65, epsilon = 1e-12);
        assert_relative_eq!(cdfs[0].unwrap(), 3.3, epsilon = 1e-12);
    }

    #[test]
    fn test_blank_factor_blanks_left() {
        let pattern = DevelopmentPattern::new(vec![Some(2.0), None, Some(1.1)]);
        assert_eq!(pattern.cdfs()[0], None);
        assert_eq!(pattern.cdfs()[1], None);
        assert!(pattern.cdfs()[2].is_some());
    }

    #[test]
    fn test_blank_final_factor_is_unity() {
        let pattern = DevelopmentPattern::new(vec![Some(2.0), Some(1.5), None]);
        let cdfs = pattern.cdfs();
        assert_eq!(cdfs[2], Some(1.0));
        assert_relative_eq!(cdfs[1].unwrap(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(cdfs[0].unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_ultimates() {
        let pattern = DevelopmentPattern::new(vec![Some(1.5), Some(1.1)]);
        let projection = pattern.project(&small());
        // Fully developed row uses a tail of 1.0
        assert_relative_eq!(projection.ultimates[0].unwrap(), 165.0, epsilon = 1e-9);
        assert_relative_eq!(projection.ultimates[1].unwrap(), 280.0 * 1.1, epsilon = 1e-9);
        assert_relative_eq!(projection.ultimates[2].unwrap(), 300.0 * 1.65, epsilon = 1e-9);
    }
}
