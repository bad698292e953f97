use std::collections::VecDeque;

use super::neighbors;
use crate::maze::{Coord, Grid};

/// Breadth-first search over the grid's open cells. On a unit-cost grid the
/// first visit to any cell is along a shortest path, which makes this the
/// optimality oracle for the A* solver in tests.
pub(super) fn solve(grid: &Grid, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let size = grid.rows() as usize * grid.cols() as usize;
    let cols = grid.cols() as usize;
    let ravel = |coord: Coord| coord.0 as usize * cols + coord.1 as usize;

    let mut visited = vec![false; size];
    let mut prev: Vec<Option<Coord>> = vec![None; size];

    let mut queue = VecDeque::new();
    visited[ravel(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for neighbor in neighbors(current, grid) {
            let idx = ravel(neighbor);
            if grid[neighbor].wall || visited[idx] {
                continue;
            }
            visited[idx] = true;
            prev[idx] = Some(current);
            queue.push_back(neighbor);
        }
    }

    if !visited[ravel(goal)] {
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
    Some(path)
}
