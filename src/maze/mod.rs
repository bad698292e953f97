pub mod cell;

use std::fmt;

pub use cell::Cell;

/// A `(row, col)` coordinate into the grid.
pub type Coord = (u16, u16);

/// The two movable endpoint markers of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
}

/// Grid access outside the `[0, rows) x [0, cols)` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub row: u16,
    pub col: u16,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate ({}, {}) is outside the grid", self.row, self.col)
    }
}

impl std::error::Error for OutOfRange {}

/// A fixed-size grid of cells plus the start and goal markers.
///
/// Dimensions never change after construction. The start and goal markers are
/// always open cells and never share a position; `relocate_marker` enforces
/// this, and callers mutating walls directly must not wall a marker cell.
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Box<[Cell]>,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Creates a grid of all-wall cells with the start marker at `(0, 0)` and
    /// the goal marker at `(rows - 1, cols - 1)`, both forced open.
    ///
    /// # Panics
    /// If the grid holds fewer than two cells, since the `start != goal`
    /// invariant cannot hold on a single cell.
    pub fn new(rows: u16, cols: u16) -> Self {
        assert!(
            rows as u32 * cols as u32 >= 2,
            "grid must contain at least two cells so start and goal can differ"
        );
        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        let mut id = 0u32;
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col, true, id));
                id += 1;
            }
        }
        let mut grid = Grid {
            rows,
            cols,
            cells: cells.into_boxed_slice(),
            start: (0, 0),
            goal: (rows - 1, cols - 1),
        };
        let (start, goal) = (grid.start, grid.goal);
        grid[start].wall = false;
        grid[goal].wall = false;
        grid
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.rows && coord.1 < self.cols
    }

    // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
    fn ravel_index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Bounds-checked read of the cell at `(row, col)`.
    pub fn at(&self, row: u16, col: u16) -> Result<Cell, OutOfRange> {
        if !self.is_in_bounds((row, col)) {
            return Err(OutOfRange { row, col });
        }
        Ok(self[(row, col)])
    }

    /// Bounds-checked write of the wall state at `(row, col)`. The cell's id
    /// is left unchanged. Callers must not wall the cell holding a marker.
    pub fn set_wall(&mut self, row: u16, col: u16, wall: bool) -> Result<(), OutOfRange> {
        if !self.is_in_bounds((row, col)) {
            return Err(OutOfRange { row, col });
        }
        self[(row, col)].wall = wall;
        Ok(())
    }

    /// Moves the given marker to `(row, col)`.
    ///
    /// Succeeds only if the target is in bounds, open, and not the other
    /// marker's position; otherwise the marker stays put and `false` is
    /// returned. Matches the click-to-move UX where invalid targets are
    /// silently ignored.
    pub fn relocate_marker(&mut self, which: Marker, row: u16, col: u16) -> bool {
        let target = (row, col);
        if !self.is_in_bounds(target) {
            return false;
        }
        let other = match which {
            Marker::Start => self.goal,
            Marker::Goal => self.start,
        };
        if self[target].wall || target == other {
            return false;
        }
        match which {
            Marker::Start => self.start = target,
            Marker::Goal => self.goal = target,
        }
        true
    }
}

// Unchecked access for callers that have already validated bounds. Indexing a
// coordinate with an out-of-range column would alias a cell on the next row,
// so external callers go through `at`/`set_wall` instead.
impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.cells[idx]
    }
}
