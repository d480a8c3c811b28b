// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Driving loop and configuration
pub mod application;

// Infrastructure layer - Terminal output and errors
pub mod rendering;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeEngine, Pattern, presets};
pub use application::{LifeConfig, Outcome, Simulation};
pub use error::{LifeError, Result};
