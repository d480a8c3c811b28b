use super::Cell;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Relative positions of the eight Moore neighbors as (d_row, d_col).
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid holds one generation of the bounded automaton.
///
/// Cells are stored row-major and addressed as `(row, col)`. The outermost
/// rows and columns form a permanently dead frame: `evolve` never brings a
/// border cell to life, so interior neighbor lookups stay in bounds without
/// wrapping or edge checks.
///
/// `Clone` is a deep copy of the cell buffer; a cloned grid shares nothing
/// with its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        }
    }

    /// Build a grid from rows of booleans (`true` = alive).
    /// Every row must have the same length as the first one.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(height * width);

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LifeError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&alive| Cell::from_alive(alive)));
        }

        Ok(Self { height, width, cells })
    }

    /// Get grid dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Convenience for `get(..) == Some(Cell::Alive)`
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Whether `(row, col)` lies on the dead frame around the interior
    pub const fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 >= self.height || col + 1 >= self.width
    }

    /// Force every border cell dead
    pub fn clear_border(mut self) -> Self {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_border(row, col) {
                    let idx = self.index(row, col);
                    self.cells[idx] = Cell::Dead;
                }
            }
        }
        self
    }

    /// Seed each interior cell alive with probability 0.5; the border is
    /// left dead regardless of what the source would have drawn.
    pub fn randomize<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = rng.random_bool(0.5);
                let idx = self.index(row, col);
                self.cells[idx] = Cell::from_alive(alive && !self.is_border(row, col));
            }
        }
        self
    }

    /// Count live neighbors of an interior cell.
    ///
    /// Only valid for interior positions; the dead frame guarantees every
    /// offset lands inside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(!self.is_border(row, col), "({row}, {col}) is a border cell");

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let r = row.wrapping_add_signed(dr);
                let c = col.wrapping_add_signed(dc);
                self.cells[self.index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure evolution - returns the next generation.
    /// Border cells are not evaluated and stay dead.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                if self.is_border(row, col) {
                    Cell::Dead
                } else {
                    self.cells[self.index(row, col)].evolve(self.count_live_neighbors(row, col))
                }
            })
            .collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over rows as cell slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn single_cell(height: usize, width: usize, row: usize, col: usize) -> Grid {
        let mut grid = Grid::new(height, width);
        grid.set(row, col, Cell::Alive);
        grid
    }

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 3, Cell::Alive);
        grid.set(9, 9, Cell::Alive);
        assert_eq!(grid.get(2, 3), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2), Some(Cell::Dead));
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(&[vec![false; 3], vec![false; 2]]).unwrap_err();
        assert!(matches!(
            err,
            LifeError::RaggedRows { row: 1, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_from_rows_row_major() {
        let grid = Grid::from_rows(&[[false, true], [true, false], [false, false]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(1, 0));
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn test_border_detection() {
        let grid = Grid::new(4, 5);
        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(3, 2));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(2, 4));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 3));
    }

    #[test]
    fn test_single_cell_neighbor_counts() {
        let grid = single_cell(7, 7, 3, 3);

        for (row, col, _) in grid.iter_cells().filter(|&(r, c, _)| !grid.is_border(r, c)) {
            let adjacent = row.abs_diff(3) <= 1 && col.abs_diff(3) <= 1 && (row, col) != (3, 3);
            let expected = u8::from(adjacent);
            assert_eq!(grid.count_live_neighbors(row, col), expected, "at ({row}, {col})");
        }
    }

    #[test]
    fn test_full_neighborhood_counts_eight() {
        let mut grid = Grid::new(5, 5);
        for row in 1..4 {
            for col in 1..4 {
                grid.set(row, col, Cell::Alive);
            }
        }
        grid.set(2, 2, Cell::Dead);
        assert_eq!(grid.count_live_neighbors(2, 2), 8);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let next = single_cell(5, 5, 2, 2).evolve();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_evolve_is_pure() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(12, 12).randomize(&mut rng);
        let snapshot = grid.clone();

        assert_eq!(grid.evolve(), grid.evolve());
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_evolve_never_touches_border() {
        // Interior packed solid next to the frame would spill births outward
        let mut grid = Grid::new(6, 6);
        for row in 1..5 {
            for col in 1..5 {
                grid.set(row, col, Cell::Alive);
            }
        }
        let next = grid.evolve();
        for (row, col, cell) in next.iter_cells() {
            if next.is_border(row, col) {
                assert_eq!(cell, Cell::Dead, "border ({row}, {col}) came alive");
            }
        }
    }

    #[test]
    fn test_randomize_keeps_border_dead() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::new(10, 10).randomize(&mut rng);
        assert!(grid
            .iter_cells()
            .filter(|&(r, c, _)| grid.is_border(r, c))
            .all(|(_, _, cell)| cell == Cell::Dead));
        assert!(grid.population() > 0);
    }

    #[test]
    fn test_clear_border() {
        let grid = Grid::from_rows(&[[true; 4], [true; 4], [true; 4], [true; 4]])
            .unwrap()
            .clear_border();
        assert_eq!(grid.population(), 4);
        assert!(grid.is_alive(1, 1) && grid.is_alive(2, 2));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = single_cell(5, 5, 2, 2);
        let copy = grid.clone();
        grid.set(2, 2, Cell::Dead);
        grid.set(1, 1, Cell::Alive);
        assert!(copy.is_alive(2, 2));
        assert!(!copy.is_alive(1, 1));
    }

    #[test]
    fn test_rows_iteration() {
        let grid = single_cell(3, 4, 1, 2);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
        assert_eq!(rows[1][2], Cell::Alive);
    }
}
