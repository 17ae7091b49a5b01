//! FASLR factor grid - loss development factor selection for loss reserving
//!
//! This library provides:
//! - Loss triangles, link ratios and CSV loading
//! - LDF fitting with volume-weighted, straight, geometric and medial averages
//! - An editable factor grid: exclusions, selected/overridden LDFs, CDFs and
//!   ultimate losses kept consistent by full recompute on every edit
//! - A toolkit-independent table contract for displaying and editing the grid
//! - Rate-change index matrices

pub mod development;
pub mod display;
pub mod error;
pub mod grid;
pub mod index;
pub mod settings;
pub mod triangle;

// Re-export commonly used types
pub use development::{AverageMethod, AverageSpec, ChainLadderFitter, FactorFitter};
pub use display::{DisplayConfig, FactorTable, TriangleTable};
pub use error::{GridError, TriangleError};
pub use grid::{EngineConfig, FactorGrid, GridEvent, GridObserver};
pub use settings::Settings;
pub use triangle::Triangle;
