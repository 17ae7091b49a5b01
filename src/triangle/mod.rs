//! Loss triangles, link ratios and triangle loading

mod data;
pub mod loader;
pub mod sample;

pub use data::{LinkRatios, Triangle};
pub use loader::{load_triangle, load_triangle_from_reader};
