//! Presentation contract for factor and triangle tables
//!
//! Nothing here knows about a widget toolkit. Tables expose display
//! strings, style flags and editability per cell, route user gestures to
//! grid operations, and export selections as tab-separated text.

mod clipboard;
mod format;
mod table;
mod triangle_view;

pub use clipboard::copy_region;
pub use format::{DisplayConfig, ValueKind};
pub use table::{Background, CellStyle, ColumnKind, DisplayCell, FactorTable, RowKind};
pub use triangle_view::TriangleTable;
