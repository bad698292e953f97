mod astar;
mod bfs;

use crate::maze::{Coord, Grid};

/// Available shortest-path solvers. Both return optimal paths on the
/// unit-cost grid; BFS doubles as the optimality cross-check for A* in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    AStar,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::AStar => write!(f, "A* Search"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Computes a shortest path from `start` to `goal` through open cells,
/// inclusive of both endpoints, with consecutive cells orthogonally adjacent.
/// Returns `None` when the goal is unreachable; that is an expected outcome,
/// not an error. Each call builds its search state from scratch.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord, solver: Solver) -> Option<Vec<Coord>> {
    match solver {
        Solver::AStar => astar::solve(grid, start, goal),
        Solver::Bfs => bfs::solve(grid, start, goal),
    }
}

/// In-bounds orthogonal neighbors of a cell.
// NOTE: wrapping_sub turns an underflow at row/col 0 into u16::MAX, which the
// bounds filter then discards, and saturating_add cannot overflow past the
// largest dimension numerically possible.
fn neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> {
    let (row, col) = coord;
    [
        (row.wrapping_sub(1), col),
        (row.saturating_add(1), col),
        (row, col.wrapping_sub(1)),
        (row, col.saturating_add(1)),
    ]
    .into_iter()
    .filter(move |&c| grid.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use rand::{SeedableRng, rngs::StdRng};

    /// 5x5 grid whose only open cells form an L: across the top row, then
    /// down the last column. The unique path from (0,0) to (4,4) is 8 steps.
    fn l_corridor() -> Grid {
        let mut grid = Grid::new(5, 5);
        for col in 0..5 {
            grid.set_wall(0, col, false).unwrap();
        }
        for row in 0..5 {
            grid.set_wall(row, 4, false).unwrap();
        }
        grid
    }

    #[test]
    fn test_neighbors_clip_to_bounds() {
        let grid = Grid::new(3, 3);
        let corner = neighbors((0, 0), &grid).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        let center = neighbors((1, 1), &grid).collect::<Vec<_>>();
        assert_eq!(center, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_both_solvers_find_the_unique_corridor_path() {
        let grid = l_corridor();
        for solver in [Solver::AStar, Solver::Bfs] {
            let path = find_path(&grid, (0, 0), (4, 4), solver).unwrap();
            assert_eq!(path.len(), 9, "8 steps means 9 cells ({})", solver);
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&(4, 4)));
        }
    }

    #[test]
    fn test_path_cells_are_adjacent_and_open() {
        let grid = l_corridor();
        let path = find_path(&grid, (0, 0), (4, 4), Solver::AStar).unwrap();
        for pair in path.windows(2) {
            let steps = pair[0].0.abs_diff(pair[1].0) + pair[0].1.abs_diff(pair[1].1);
            assert_eq!(steps, 1);
        }
        assert!(path.iter().all(|&coord| !grid[coord].wall));
    }

    #[test]
    fn test_unreachable_goal_is_not_found() {
        // Only the two marker cells are open, and they are not adjacent
        let grid = Grid::new(5, 5);
        for solver in [Solver::AStar, Solver::Bfs] {
            assert_eq!(find_path(&grid, (0, 0), (4, 4), solver), None);
        }
    }

    #[test]
    fn test_detour_longer_than_manhattan_distance() {
        // S-shaped corridor: right along row 0, down to row 2, back left
        // along row 2, down to row 4, right again. The only route is 16
        // steps, double the Manhattan distance, so the heuristic must not
        // mislead the search into a dead end.
        let mut grid = Grid::new(5, 5);
        for col in 0..5 {
            grid.set_wall(0, col, false).unwrap();
            grid.set_wall(2, col, false).unwrap();
            grid.set_wall(4, col, false).unwrap();
        }
        grid.set_wall(1, 4, false).unwrap();
        grid.set_wall(3, 0, false).unwrap();
        for solver in [Solver::AStar, Solver::Bfs] {
            let path = find_path(&grid, (0, 0), (4, 4), solver).unwrap();
            assert_eq!(path.len(), 17, "{}", solver);
        }
    }

    #[test]
    fn test_astar_matches_bfs_on_generated_mazes() {
        for seed in 0..8 {
            let grid = generators::generate(9, 9, &mut StdRng::seed_from_u64(seed));
            let astar = find_path(&grid, grid.start(), grid.goal(), Solver::AStar);
            let bfs = find_path(&grid, grid.start(), grid.goal(), Solver::Bfs);
            let astar = astar.expect("generated maze is fully connected");
            let bfs = bfs.expect("generated maze is fully connected");
            assert_eq!(astar.len(), bfs.len(), "seed {}", seed);
        }
    }

    #[test]
    fn test_repeated_searches_tie_break_identically() {
        // Fully open grid: many shortest paths, so this exercises the
        // coordinate tie-break in the frontier ordering
        let mut grid = Grid::new(5, 5);
        for row in 0..5 {
            for col in 0..5 {
                grid.set_wall(row, col, false).unwrap();
            }
        }
        let first = find_path(&grid, (0, 0), (4, 4), Solver::AStar).unwrap();
        let second = find_path(&grid, (0, 0), (4, 4), Solver::AStar).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9); // Manhattan distance, nothing in the way
    }
}
