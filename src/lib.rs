//! Perfect-maze generation and interactive shortest-path search for the
//! terminal.
//!
//! The algorithmic core lives in [`generators`] (randomized Kruskal over a
//! disjoint set, producing a maze with exactly one simple path between any two
//! open cells) and [`solvers`] (A* with a Manhattan heuristic, plus BFS). The
//! [`maze`] module holds the grid and marker model, and [`app`] wraps it all
//! in a crossterm UI where mouse clicks move the start/goal markers and any
//! key regenerates the maze.

pub mod app;
pub mod generators;
pub mod maze;
pub mod solvers;
