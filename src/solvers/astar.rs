use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::neighbors;
use crate::maze::{Coord, Grid};

const INF: u32 = u32::MAX;

/// Manhattan distance. Admissible and consistent for unit-cost 4-connected
/// moves, so the first pop of any cell already carries its optimal cost.
fn heuristic(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) as u32 + a.1.abs_diff(b.1) as u32
}

/// A* over the grid's open cells.
///
/// The frontier is a min-heap keyed by `(g + h, coord)`; the coordinate
/// tie-break makes the order total, so the returned path is deterministic for
/// a fixed grid and markers. A cell is relaxed only while its cost is still
/// INF (first settle is final), which is correct because every move costs 1
/// and the heuristic is consistent; each cell then enters the frontier at
/// most once.
pub(super) fn solve(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let size = grid.rows() as usize * grid.cols() as usize;
    let cols = grid.cols() as usize;
    let ravel = |coord: Coord| coord.0 as usize * cols + coord.1 as usize;

    let mut cost = vec![INF; size];
    let mut prev: Vec<Option<Coord>> = vec![None; size];

    let mut frontier: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();
    cost[ravel(start)] = 0;
    frontier.push(Reverse((heuristic(start, goal), start)));

    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == goal {
            break;
        }
        let next_cost = cost[ravel(current)] + 1;
        for neighbor in neighbors(current, grid) {
            let idx = ravel(neighbor);
            // Only relax cells never reached before; relaxing on
            // lower-or-equal would matter for non-uniform costs but must not
            // happen here
            if grid[neighbor].wall || cost[idx] != INF {
                continue;
            }
            cost[idx] = next_cost;
            prev[idx] = Some(current);
            frontier.push(Reverse((next_cost + heuristic(neighbor, goal), neighbor)));
        }
    }

    if cost[ravel(goal)] == INF {
        // Goal never settled; there is no predecessor chain to walk
        tracing::debug!(?start, ?goal, "goal unreachable");
        return None;
    }

    // Walk predecessors goal -> start, then flip into start -> goal order
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = prev[ravel(current)] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    tracing::debug!(?start, ?goal, steps = path.len() - 1, "path found");
    Some(path)
}
