//! Occupancy grids, the search domain.
//!
//! On the wire a grid is a `(0|1)[][]` matrix where `1` is a wall and `0` an
//! open cell. [`Grid::from_rows`] validates that shape once so the search
//! engines can index freely.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::position::Position;

/// Neighbor expansion order: right, down, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    fn from_wire(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }
}

/// A rectangular, non-empty matrix of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from the wire matrix.
    ///
    /// Fails with [`TraceError::InvalidInput`] when the matrix is empty,
    /// ragged, or holds a value other than `0` or `1`.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, TraceError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(TraceError::invalid_input("grid rows must not be empty")),
            None => return Err(TraceError::invalid_input("grid must have at least one row")),
        };

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(TraceError::invalid_input(format!(
                    "grid is not rectangular: row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_wire(value).ok_or_else(|| {
                    TraceError::invalid_input(format!(
                        "grid cell ({}, {}) has value {}, expected 0 (open) or 1 (wall)",
                        r, c, value
                    ))
                })?;
                cells.push(cell);
            }
        }

        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// An all-open grid. Dimensions of zero are bumped to one.
    pub fn open(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Grid {
            rows,
            cols,
            cells: vec![Cell::Open; rows * cols],
        }
    }

    /// An open grid with the listed cells walled off. Out-of-range walls are
    /// ignored.
    pub fn with_walls(rows: usize, cols: usize, walls: &[Position]) -> Self {
        let mut grid = Grid::open(rows, cols);
        for &pos in walls {
            if let Some(idx) = grid.index_of(pos) {
                grid.cells[idx] = Cell::Wall;
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Row-major index of `pos`, or `None` when out of bounds.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row() * self.cols + pos.col())
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Open)
    }

    /// In-bounds open neighbors of `pos`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |delta| pos.offset(delta))
            .filter(move |&next| self.is_open(next))
    }

    /// Number of walls in the grid.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Wall).count()
    }

    /// Converts back to the `(0|1)[][]` wire matrix.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.to_wire()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = TraceError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}
