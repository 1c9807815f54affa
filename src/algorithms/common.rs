use crate::error::{Error, Result};
use crate::grid::{GridView, Position};
use crate::statistics::SearchStats;

/// Outcome of a single search. `NotFound` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Path from start to goal, both included.
    Found(Vec<Position>),
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&[Position]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// Number of moves along the path (one less than its length).
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }
}

pub trait PathfindingAlgorithm {
    fn name(&self) -> &'static str;

    fn find_path(
        &mut self,
        grid: &dyn GridView,
        start: Position,
        goal: Position,
    ) -> Result<PathResult>;

    /// Counters from the most recent call, when the algorithm keeps them.
    fn stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Manhattan distance between two cells, saturating at `u32::MAX`. The
/// clamped value never exceeds the true distance.
pub fn manhattan(a: Position, b: Position) -> u32 {
    let distance = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    u32::try_from(distance).unwrap_or(u32::MAX)
}

/// Rejects positions outside the grid before any search starts.
pub fn check_bounds(grid: &dyn GridView, pos: Position) -> Result<()> {
    if grid.in_bounds(pos) {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            position: pos,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

/// A cell can be entered if the grid says so, and the goal always can.
pub fn is_enterable(grid: &dyn GridView, pos: Position, goal: Position) -> bool {
    pos == goal || grid.is_open(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Grid};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 5);
        let b = Position::new(4, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_saturates_on_huge_distances() {
        let origin = Position::new(0, 0);
        assert_eq!(manhattan(origin, Position::new(usize::MAX, usize::MAX)), u32::MAX);
        let past_u32 = u32::MAX as usize + 5;
        assert_eq!(manhattan(origin, Position::new(past_u32, 0)), u32::MAX);
        assert_eq!(manhattan(origin, Position::new(u32::MAX as usize - 1, 1)), u32::MAX);
    }

    #[test]
    fn moves_counts_steps_not_cells() {
        let result = PathResult::Found(vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(result.moves(), Some(1));
        assert_eq!(PathResult::NotFound.moves(), None);
    }

    #[test]
    fn goal_is_enterable_even_when_walled() {
        let mut grid = Grid::new(2, 1);
        let goal = Position::new(1, 0);
        grid.set(goal, Cell::Wall);
        assert!(is_enterable(&grid, goal, goal));
        assert!(!is_enterable(&grid, goal, Position::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_is_invalid_input() {
        let grid = Grid::new(2, 2);
        assert!(check_bounds(&grid, Position::new(1, 1)).is_ok());
        assert!(matches!(
            check_bounds(&grid, Position::new(0, 2)),
            Err(Error::InvalidInput { width: 2, height: 2, .. })
        ));
    }
}
