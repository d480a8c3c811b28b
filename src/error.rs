//! Error types for the simulation.
//!
//! The engine itself never fails once built; everything here is raised at
//! construction time (grid shape, configuration) or by the terminal sink.

/// Errors that can occur while setting up or rendering the simulation.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// The grid has no interior cells: a dead border plus at least one
    /// interior cell requires both dimensions to be at least 3.
    #[error("grid must be at least 3x3, got {height}x{width}")]
    DegenerateGrid { height: usize, width: usize },

    /// Rows passed to `Grid::from_rows` have differing lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A configuration value is missing its expected shape.
    #[error("config error: {0}")]
    InvalidConfig(String),

    /// Writing a frame to the terminal failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
