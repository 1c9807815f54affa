use crate::algorithms::common::{check_bounds, is_enterable, PathResult, PathfindingAlgorithm};
use crate::error::Result;
use crate::grid::{GridView, Position};
use pathfinding::prelude::{bfs, bfs_reach};
use rustc_hash::FxHashSet;

/// Breadth-first search using the `pathfinding` crate. Every move costs the
/// same, so the first path it finds is a shortest one; used as the reference
/// answer for A*.
#[derive(Default)]
pub struct Bfs;

impl Bfs {
    pub fn new() -> Self {
        Bfs
    }
}

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn find_path(
        &mut self,
        grid: &dyn GridView,
        start: Position,
        goal: Position,
    ) -> Result<PathResult> {
        check_bounds(grid, start)?;
        check_bounds(grid, goal)?;

        let result = bfs(
            &start,
            |p| successors(grid, *p, goal),
            |p| *p == goal,
        );
        Ok(result.map_or(PathResult::NotFound, PathResult::Found))
    }
}

/// Every cell reachable from `start` under the same movement rules the
/// searches use, `start` included.
pub fn reachable(grid: &dyn GridView, start: Position, goal: Position) -> FxHashSet<Position> {
    bfs_reach(start, |p| successors(grid, *p, goal)).collect()
}

fn successors(grid: &dyn GridView, pos: Position, goal: Position) -> Vec<Position> {
    grid.neighbors(pos)
        .into_iter()
        .filter(|next| is_enterable(grid, *next, goal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};

    #[test]
    fn bfs_finds_shortest_path() {
        let mut grid = Grid::new(4, 3);
        grid.set(Position::new(1, 0), Cell::Wall);
        grid.set(Position::new(1, 1), Cell::Wall);
        let result = Bfs::new()
            .find_path(&grid, Position::new(0, 0), Position::new(2, 0))
            .unwrap();
        assert_eq!(result.moves(), Some(6));
    }

    #[test]
    fn bfs_start_equals_goal() {
        let grid = Grid::new(2, 2);
        let p = Position::new(1, 1);
        assert_eq!(
            Bfs::new().find_path(&grid, p, p).unwrap(),
            PathResult::Found(vec![p])
        );
    }

    #[test]
    fn reachable_stops_at_walls() {
        let mut grid = Grid::new(3, 1);
        grid.set(Position::new(1, 0), Cell::Wall);
        let region = reachable(&grid, Position::new(0, 0), Position::new(2, 0));
        assert_eq!(region.len(), 1);
        assert!(region.contains(&Position::new(0, 0)));
    }
}
