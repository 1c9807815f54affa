//! Text maps: rows of characters with a start marker, a goal marker, open
//! cells and walls. Parsing yields a [`Grid`] plus the two endpoints, and a
//! found path can be drawn back onto the original rows.

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, Position};

/// The map the `grid_astar` binary solves when no file is given.
pub const DEMO_MAP: &str = concat!(
    "A          \n",
    "--| |------\n",
    "           \n",
    "   |-----| \n",
    "   |     | \n",
    "---|     |B",
);

/// Which characters mean what in a text map. Anything that is neither a
/// marker nor listed in `open` is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLegend {
    pub start: char,
    pub goal: char,
    pub open: String,
    pub path: char,
}

impl Default for MapLegend {
    fn default() -> Self {
        MapLegend {
            start: 'A',
            goal: 'B',
            open: " ".to_string(),
            path: '*',
        }
    }
}

impl MapLegend {
    fn is_open(&self, c: char) -> bool {
        c == self.start || c == self.goal || self.open.contains(c)
    }
}

#[derive(Debug, Clone)]
pub struct TextMap {
    rows: Vec<Vec<char>>,
    grid: Grid,
    start: Position,
    goal: Position,
    legend: MapLegend,
}

impl TextMap {
    pub fn parse(text: &str, legend: &MapLegend) -> Result<Self> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        if rows.iter().all(Vec::is_empty) {
            return Err(Error::EmptyMap);
        }

        let mut start = None;
        let mut goal = None;
        let mut cells = Vec::with_capacity(rows.len());

        for (y, row) in rows.iter().enumerate() {
            let mut cell_row = Vec::with_capacity(row.len());
            for (x, &c) in row.iter().enumerate() {
                let pos = Position::new(x, y);
                if c == legend.start {
                    place_marker(&mut start, legend.start, pos)?;
                }
                if c == legend.goal {
                    place_marker(&mut goal, legend.goal, pos)?;
                }
                cell_row.push(if legend.is_open(c) { Cell::Empty } else { Cell::Wall });
            }
            cells.push(cell_row);
        }

        let start = start.ok_or(Error::MissingMarker {
            marker: legend.start,
        })?;
        let goal = goal.ok_or(Error::MissingMarker {
            marker: legend.goal,
        })?;

        Ok(TextMap {
            rows,
            grid: Grid::from_rows(&cells),
            start,
            goal,
            legend: legend.clone(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The map rows with every open, unmarked cell of `path` drawn with the
    /// legend's path character.
    pub fn render(&self, path: &[Position]) -> String {
        let mut rows = self.rows.clone();
        for pos in path {
            if let Some(c) = rows.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
                if self.legend.open.contains(*c) {
                    *c = self.legend.path;
                }
            }
        }
        rows.iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn place_marker(slot: &mut Option<Position>, marker: char, pos: Position) -> Result<()> {
    match *slot {
        Some(first) => Err(Error::DuplicateMarker {
            marker,
            first,
            second: pos,
        }),
        None => {
            *slot = Some(pos);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridView;

    #[test]
    fn parse_locates_markers_and_walls() {
        let map = TextMap::parse("A -\n  B", &MapLegend::default()).unwrap();
        assert_eq!(map.start(), Position::new(0, 0));
        assert_eq!(map.goal(), Position::new(2, 1));
        assert_eq!(map.grid().width(), 3);
        assert_eq!(map.grid().height(), 2);
        assert!(!map.grid().is_open(Position::new(2, 0)));
        assert!(map.grid().is_open(Position::new(1, 1)));
    }

    #[test]
    fn parse_demo_map() {
        let map = TextMap::parse(DEMO_MAP, &MapLegend::default()).unwrap();
        assert_eq!(map.start(), Position::new(0, 0));
        assert_eq!(map.goal(), Position::new(10, 5));
        assert_eq!(map.grid().width(), 11);
        assert_eq!(map.grid().height(), 6);
    }

    #[test]
    fn missing_marker_is_reported() {
        let err = TextMap::parse("A  \n   ", &MapLegend::default()).unwrap_err();
        assert!(matches!(err, Error::MissingMarker { marker: 'B' }));
    }

    #[test]
    fn duplicate_marker_is_reported() {
        let err = TextMap::parse("A A\n  B", &MapLegend::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateMarker { marker: 'A', first, second }
                if first == Position::new(0, 0) && second == Position::new(2, 0)
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            TextMap::parse("", &MapLegend::default()),
            Err(Error::EmptyMap)
        ));
    }

    #[test]
    fn custom_legend() {
        let legend = MapLegend {
            start: 'S',
            goal: 'G',
            open: ".".to_string(),
            path: 'o',
        };
        let map = TextMap::parse("S.#\n..G", &legend).unwrap();
        assert!(!map.grid().is_open(Position::new(2, 0)));
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ];
        assert_eq!(map.render(&path), "S.#\nooG");
    }

    #[test]
    fn render_leaves_markers_and_walls() {
        let map = TextMap::parse("A -\n  B", &MapLegend::default()).unwrap();
        let path = [
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(2, 1),
        ];
        assert_eq!(map.render(&path), "A*-\n *B");
    }
}
