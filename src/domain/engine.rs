//! The simulation core: owns the current generation, advances it, and
//! decides when the run has settled.

use super::{Cell, Grid};
use crate::error::{LifeError, Result};
use rand::Rng;
use tracing::{debug, trace};

/// Smallest side length that still leaves one interior cell inside the
/// dead frame.
pub const MIN_SIDE: usize = 3;

/// LifeEngine drives a bounded Game of Life.
///
/// It keeps the current generation and the one before it. Stability is
/// judged on three consecutive generations, so only fixed points are ever
/// reported; oscillators with period 2 or more run until stopped externally.
#[derive(Debug)]
pub struct LifeEngine {
    grid: Grid,
    previous: Option<Grid>,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with a randomly seeded interior.
    ///
    /// Each interior cell is drawn alive with probability 0.5 from `rng`;
    /// border cells start (and stay) dead.
    pub fn new<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Result<Self> {
        check_dimensions(height, width)?;
        let grid = Grid::new(height, width).randomize(rng);
        debug!(height, width, population = grid.population(), "seeded initial generation");
        Ok(Self::with_grid(grid))
    }

    /// Create an engine from a prepared generation.
    /// Any live border cells are cleared.
    pub fn from_grid(grid: Grid) -> Result<Self> {
        let (height, width) = grid.dimensions();
        check_dimensions(height, width)?;
        Ok(Self::with_grid(grid.clear_border()))
    }

    fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            previous: None,
            generation: 0,
        }
    }

    /// Compute the next generation and report whether the run is stable.
    ///
    /// The verdict compares the pre-advance `previous` and `current` grids
    /// with the freshly computed one; afterwards the window shifts by one.
    /// The first call is never stable.
    pub fn advance(&mut self) -> (&Grid, bool) {
        let next = self.grid.evolve();
        let stable = is_stable(self.previous.as_ref(), &self.grid, &next);

        // The old current grid is moved, not aliased, into the history slot.
        self.previous = Some(std::mem::replace(&mut self.grid, next));
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            stable,
            "advanced"
        );
        (&self.grid, stable)
    }

    /// Paint a single cell of the current generation.
    /// Border and out-of-range positions are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if !self.grid.is_border(row, col) {
            self.grid.set(row, col, cell);
        }
    }

    /// The current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The generation before `grid()`, absent until the first advance
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    /// Grid dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Number of completed advances
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<()> {
    if height < MIN_SIDE || width < MIN_SIDE {
        return Err(LifeError::DegenerateGrid { height, width });
    }
    Ok(())
}

/// True iff `previous`, `current` and `next` are identical cell for cell.
///
/// Without a `previous` generation there is no history to judge, so the
/// answer is false. This recognises fixed points only: a blinker alternates
/// between two distinct states and is never reported stable.
pub fn is_stable(previous: Option<&Grid>, current: &Grid, next: &Grid) -> bool {
    match previous {
        None => false,
        Some(previous) => previous == current && previous == next,
    }
}
