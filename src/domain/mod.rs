mod cell;
mod grid;
mod patterns;
pub mod engine;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use engine::{LifeEngine, is_stable};
