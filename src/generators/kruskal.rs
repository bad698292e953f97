use rand::Rng;

use super::dsu::DisjointSet;
use crate::maze::{Coord, Grid};

/// Candidate passage between two rooms of the even-parity sub-lattice, keyed
/// for random ordering.
struct Edge {
    key: u32,
    room_a: Coord,
    room_b: Coord,
}

/// Generates a perfect maze with randomized Kruskal's algorithm.
///
/// Cells at even row and even column are rooms; every room is a candidate for
/// a passage to the room two cells right or two cells below, carved by opening
/// both rooms and the wall cell between them. Edges are processed in uniform
/// random order (an independent random key per edge, sorted ascending) and
/// accepted only when they join two different components, so the accepted set
/// is a spanning tree of the rooms and the maze has exactly one simple path
/// between any two open cells.
///
/// `rows` and `cols` should be odd; an even dimension can leave boundary rooms
/// without any in-bounds candidate edge, which would disconnect them. This is
/// a caller precondition, not checked at runtime.
///
/// The output is a pure function of `(rows, cols)` and the random stream, so a
/// seeded `rng` reproduces the same maze bit for bit.
pub fn generate(rows: u16, cols: u16, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(rows, cols);
    let mut dsu = DisjointSet::new(rows as u32 * cols as u32);

    let mut edges = Vec::new();
    for row in (0..rows).step_by(2) {
        for col in (0..cols).step_by(2) {
            // saturating_add keeps the neighbor coordinate comparable at the
            // numeric boundary instead of overflowing
            for neighbor in [(row, col.saturating_add(2)), (row.saturating_add(2), col)] {
                if neighbor.0 < rows && neighbor.1 < cols {
                    edges.push(Edge {
                        key: rng.random(),
                        room_a: (row, col),
                        room_b: neighbor,
                    });
                }
            }
        }
    }
    // Stable sort, so equal keys keep enumeration order and the result stays
    // a pure function of the random stream
    edges.sort_by_key(|edge| edge.key);

    let mut accepted = 0usize;
    for edge in &edges {
        let a = grid[edge.room_a].id();
        let b = grid[edge.room_b].id();
        if dsu.find(a) == dsu.find(b) {
            // Rooms already connected; accepting would close a cycle
            continue;
        }
        dsu.union(a, b, rng);

        let between = (
            (edge.room_a.0 + edge.room_b.0) / 2,
            (edge.room_a.1 + edge.room_b.1) / 2,
        );
        for coord in [edge.room_a, between, edge.room_b] {
            grid[coord].wall = false;
        }
        accepted += 1;
    }

    tracing::debug!(
        rows,
        cols,
        candidate_edges = edges.len(),
        accepted,
        "carved maze"
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{self, Solver};
    use rand::{SeedableRng, rngs::StdRng};

    fn open_cells(grid: &Grid) -> Vec<Coord> {
        (0..grid.rows())
            .flat_map(|row| (0..grid.cols()).map(move |col| (row, col)))
            .filter(|&coord| !grid[coord].wall)
            .collect()
    }

    #[test]
    fn test_perfect_maze_open_cell_count() {
        // A spanning tree of R rooms accepts R - 1 edges, each opening one
        // wall cell, so the open cells number exactly 2R - 1
        for (rows, cols) in [(5, 5), (9, 7), (3, 11)] {
            let mut rng = StdRng::seed_from_u64(42);
            let grid = generate(rows, cols, &mut rng);
            let rooms = ((rows as usize + 1) / 2) * ((cols as usize + 1) / 2);
            assert_eq!(open_cells(&grid).len(), 2 * rooms - 1);
        }
    }

    #[test]
    fn test_every_open_cell_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate(9, 9, &mut rng);
        let start = grid.start();
        for coord in open_cells(&grid) {
            assert!(
                solvers::find_path(&grid, start, coord, Solver::Bfs).is_some(),
                "open cell {:?} unreachable from start",
                coord
            );
        }
    }

    #[test]
    fn test_markers_are_open() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(7, 7, &mut rng);
        assert!(!grid[grid.start()].wall);
        assert!(!grid[grid.goal()].wall);
    }

    #[test]
    fn test_seeded_5x5_maze_is_pinned() {
        // Wall pattern captured once for seed 42; '#' is wall, '.' is open.
        // A mismatch here means the generator's output changed for a given
        // random stream, which breaks reproducibility of seeded mazes.
        let expected = [".....", ".#.##", ".#...", "####.", "....."];
        let grid = generate(5, 5, &mut StdRng::seed_from_u64(42));
        for row in 0..5u16 {
            for col in 0..5u16 {
                assert_eq!(
                    grid[(row, col)].wall,
                    expected[row as usize].as_bytes()[col as usize] == b'#',
                    "cell ({}, {})",
                    row,
                    col
                );
            }
        }
        // The shortest path across this fixture is likewise pinned: 8 steps
        let path = solvers::find_path(&grid, (0, 0), (4, 4), Solver::AStar).unwrap();
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate(11, 11, &mut StdRng::seed_from_u64(99));
        let second = generate(11, 11, &mut StdRng::seed_from_u64(99));
        for row in 0..11 {
            for col in 0..11 {
                assert_eq!(first[(row, col)].wall, second[(row, col)].wall);
            }
        }
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let first = generate(11, 11, &mut StdRng::seed_from_u64(0));
        let second = generate(11, 11, &mut StdRng::seed_from_u64(1));
        let differs = (0..11)
            .flat_map(|row| (0..11).map(move |col| (row, col)))
            .any(|coord| first[coord].wall != second[coord].wall);
        assert!(differs);
    }
}
