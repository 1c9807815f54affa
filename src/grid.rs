use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Read-only view of a rectangular map: its bounds and which cells can be
/// walked on. Searches only ever see a grid through this trait.
pub trait GridView {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether `pos` can be entered. Only called for in-bounds positions.
    fn is_open(&self, pos: Position) -> bool;

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// In-bounds 4-connected neighbors of `pos`, in the order up, down, left,
    /// right. Passability is left to the caller.
    fn neighbors(&self, pos: Position) -> Vec<Position> {
        let candidates = [
            pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
            pos.y.checked_add(1).map(|y| Position::new(pos.x, y)),
            pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
            pos.x.checked_add(1).map(|x| Position::new(x, pos.y)),
        ];

        let mut neighbors = Vec::with_capacity(4);
        for next_pos in candidates.into_iter().flatten() {
            if self.in_bounds(next_pos) {
                neighbors.push(next_pos);
            }
        }
        neighbors
    }
}

/// Dense grid of cells, indexed `cells[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![vec![Cell::Empty; height]; width],
        }
    }

    /// Build a grid from rows of cells (`rows[y][x]`). Short rows are padded
    /// with walls up to the longest row.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Grid {
            width,
            height,
            cells: vec![vec![Cell::Wall; height]; width],
        };
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                grid.cells[x][y] = cell;
            }
        }
        grid
    }

    /// Random grid with up to `num_walls` walls, none of them on a position
    /// listed in `keep_clear`.
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        num_walls: usize,
        keep_clear: &[Position],
        rng: &mut R,
    ) -> Self {
        let mut grid = Grid::new(width, height);
        if width == 0 || height == 0 {
            return grid;
        }

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));

            if !keep_clear.contains(&pos) && grid.cell(pos) == Some(Cell::Empty) {
                grid.cells[pos.x][pos.y] = Cell::Wall;
                walls_placed += 1;
            }
            attempts += 1;
        }
        grid
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.x).and_then(|column| column.get(pos.y)).copied()
    }

    /// Returns the previous cell, or `None` if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        let slot = self.cells.get_mut(pos.x)?.get_mut(pos.y)?;
        Some(std::mem::replace(slot, cell))
    }

    pub fn wall_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Wall)
            .count()
    }
}

impl GridView for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = match self.cells[x][y] {
                    Cell::Wall => '#',
                    Cell::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
