//! Editable factor grid: exclusions, selected LDFs and their derived rows
//!
//! The grid keeps a triangle's link ratios, an exclusion mask and a row of
//! selected LDFs, and recomputes the fitted LDFs, CDFs and ultimate losses
//! in full after every edit. Observers are told which region changed.

mod config;
mod engine;
mod events;
mod mask;

pub use config::{BlankFactorPolicy, EngineConfig, InvalidEntryPolicy};
pub use engine::{FactorGrid, GridSnapshot};
pub use events::{GridEvent, GridObserver, ObserverId, RegionChange};
pub use mask::ExclusionMask;
