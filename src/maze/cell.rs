use std::cmp::Ordering;

/// A single cell of the maze grid.
///
/// Cells are identified by their `(row, col)` coordinates; the `id` is assigned
/// once at grid construction (`row * cols + col`) and serves as the disjoint-set
/// element key during generation. Equality is defined purely by coordinates, so
/// two cells at the same position compare equal regardless of wall state.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
    pub wall: bool,
    id: u32,
}

impl Cell {
    pub(crate) fn new(row: u16, col: u16, wall: bool, id: u32) -> Self {
        Cell { row, col, wall, id }
    }

    /// Stable integer identifier, a bijection with `(row, col)` for the owning
    /// grid. Never changes after construction.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The cell's `(row, col)` coordinate.
    pub fn coord(&self) -> (u16, u16) {
        (self.row, self.col)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

// Total order by (row, col). Ordering by row alone would make same-row cells
// compare as equal in ordered containers, breaking tie-breaking; see DESIGN.md.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_wall_state() {
        let a = Cell::new(2, 3, true, 13);
        let b = Cell::new(2, 3, false, 13);
        assert_eq!(a, b);
        assert_ne!(a, Cell::new(2, 4, true, 14));
    }

    #[test]
    fn test_total_order_by_row_then_col() {
        let mut cells = [
            Cell::new(1, 2, true, 7),
            Cell::new(0, 4, true, 4),
            Cell::new(1, 0, true, 5),
        ];
        cells.sort();
        assert_eq!(cells[0].coord(), (0, 4));
        assert_eq!(cells[1].coord(), (1, 0));
        assert_eq!(cells[2].coord(), (1, 2));
    }
}
