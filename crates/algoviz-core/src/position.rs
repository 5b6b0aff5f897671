//! Grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 0-based `(row, col)` cell coordinate. Serializes as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub usize, pub usize);

impl Position {
    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }

    /// Applies a `(d_row, d_col)` delta, returning `None` when either
    /// coordinate would become negative.
    pub fn offset(&self, delta: (isize, isize)) -> Option<Position> {
        let row = self.0.checked_add_signed(delta.0)?;
        let col = self.1.checked_add_signed(delta.1)?;
        Some(Position(row, col))
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: Position) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position(row, col)
    }
}
