//! Board coordinates and line directions.

use serde::{Deserialize, Serialize};

/// A cell coordinate. `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The next cell along `direction`, or `None` past the edge of a
    /// `size`×`size` board.
    #[must_use]
    pub fn forward(self, direction: Direction, size: usize) -> Option<Self> {
        let next = match direction {
            Direction::Horizontal => Self::new(self.row, self.col + 1),
            Direction::Vertical => Self::new(self.row + 1, self.col),
        };
        (next.row < size && next.col < size).then_some(next)
    }

    /// The previous cell along `direction`, or `None` at the edge.
    #[must_use]
    pub fn backward(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Horizontal => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Vertical => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
        }
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Position> {
        [
            self.backward(Direction::Vertical),
            self.forward(Direction::Vertical, size),
            self.backward(Direction::Horizontal),
            self.forward(Direction::Horizontal, size),
        ]
        .into_iter()
        .flatten()
    }

    /// Offset of this cell along `direction` (column for horizontal lines).
    #[must_use]
    pub fn along(self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.col,
            Direction::Vertical => self.row,
        }
    }

    /// True when both positions sit on the same line in `direction`.
    #[must_use]
    pub fn same_line(self, other: Position, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.row == other.row,
            Direction::Vertical => self.col == other.col,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Reading direction of a placed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    #[must_use]
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}
