//! Development factor fitting: LDF averages, CDFs and ultimate projection

mod average;
mod catalog;
mod fit;
mod pattern;

pub use average::{AverageMethod, AverageSpec};
pub use catalog::{AverageCatalog, AverageEntry};
pub use fit::{ChainLadderFitter, DropCell, FactorFitter};
pub use pattern::{DevelopmentPattern, Projection};
