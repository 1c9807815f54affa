//! Shortest paths between two cells of a 2D grid with impassable cells.
//!
//! The search itself lives in [`algorithms::a_star`]: A* over a 4-connected
//! grid with unit step cost and a Manhattan heuristic. Grids are seen only
//! through the [`grid::GridView`] trait, so any passability source can be
//! searched. [`map`] turns text maps into grids and draws paths back onto
//! them, and [`batch`] checks A* against a breadth-first reference on random
//! grids.

pub mod algorithms;
pub mod batch;
pub mod config;
pub mod error;
pub mod grid;
pub mod map;
pub mod statistics;

pub use algorithms::a_star::{AStar, SearchConfig, SearchOutcome};
pub use algorithms::common::{PathResult, PathfindingAlgorithm};
pub use error::{Error, Result};
pub use grid::{Cell, Grid, GridView, Position};

/// Shortest path from `start` to `goal` with default search settings.
///
/// Returns [`Error::InvalidInput`] if either position lies outside the grid.
/// An unreachable goal is `Ok(PathResult::NotFound)`.
pub fn find_path(grid: &dyn GridView, start: Position, goal: Position) -> Result<PathResult> {
    AStar::new()
        .search(grid, start, goal)
        .map(|outcome| outcome.result)
}
