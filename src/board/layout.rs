//! Premium square layouts.
//!
//! Layouts are written as one string per row:
//!
//! | symbol | square              |
//! |--------|---------------------|
//! | `.`    | plain               |
//! | `2`    | double letter       |
//! | `3`    | triple letter       |
//! | `d`    | double word         |
//! | `t`    | triple word         |
//! | `*`    | centre (double word)|

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Position;

/// Static multiplier attached to a cell at game creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Premium {
    #[default]
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    #[must_use]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Premium::Plain),
            '2' => Some(Premium::DoubleLetter),
            '3' => Some(Premium::TripleLetter),
            'd' | '*' => Some(Premium::DoubleWord),
            't' => Some(Premium::TripleWord),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {len} squares, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("unknown layout symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },
}

/// Board size, centre square, and premium squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    size: usize,
    center: Position,
    premiums: Vec<Premium>,
}

const STANDARD_TOP_HALF: [&str; 8] = [
    "t..2...t...2..t",
    ".d...3...3...d.",
    "..d...2.2...d..",
    "2..d...2...d..2",
    "....d.....d....",
    ".3...3...3...3.",
    "..2...2.2...2..",
    "t..2...*...2..t",
];

impl BoardLayout {
    /// The standard 15×15 layout with the centre square at (7, 7).
    #[must_use]
    pub fn standard() -> Self {
        let rows: Vec<&str> = STANDARD_TOP_HALF
            .iter()
            .chain(STANDARD_TOP_HALF.iter().rev().skip(1))
            .copied()
            .collect();
        Self::from_rows(&rows).unwrap_or_else(|_| unreachable!("standard layout is well formed"))
    }

    /// Parse a square layout from one string per row.
    ///
    /// The centre is the `*` square if present, otherwise the middle cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LayoutError> {
        let size = rows.len();
        if size == 0 {
            return Err(LayoutError::Empty);
        }

        let mut premiums = Vec::with_capacity(size * size);
        let mut center = Position::new(size / 2, size / 2);

        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != size {
                return Err(LayoutError::NotSquare { row, len, size });
            }
            for (col, symbol) in line.chars().enumerate() {
                let position = Position::new(row, col);
                let premium = Premium::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { symbol, position })?;
                if symbol == '*' {
                    center = position;
                }
                premiums.push(premium);
            }
        }

        Ok(Self {
            size,
            center,
            premiums,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn center(&self) -> Position {
        self.center
    }

    /// Premium at `pos`; plain outside the board.
    #[must_use]
    pub fn premium_at(&self, pos: Position) -> Premium {
        if pos.row >= self.size || pos.col >= self.size {
            return Premium::Plain;
        }
        self.premiums[pos.row * self.size + pos.col]
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let layout = BoardLayout::standard();
        assert_eq!(layout.size(), 15);
        assert_eq!(layout.center(), Position::new(7, 7));
        assert_eq!(layout.premium_at(Position::new(7, 7)), Premium::DoubleWord);
        assert_eq!(layout.premium_at(Position::new(0, 0)), Premium::TripleWord);
        assert_eq!(layout.premium_at(Position::new(14, 14)), Premium::TripleWord);
        assert_eq!(layout.premium_at(Position::new(1, 5)), Premium::TripleLetter);
        assert_eq!(layout.premium_at(Position::new(14, 3)), Premium::DoubleLetter);
        assert_eq!(layout.premium_at(Position::new(13, 13)), Premium::DoubleWord);
    }

    #[test]
    fn test_standard_layout_is_symmetric() {
        let layout = BoardLayout::standard();
        for row in 0..15 {
            for col in 0..15 {
                let p = layout.premium_at(Position::new(row, col));
                assert_eq!(p, layout.premium_at(Position::new(col, row)));
                assert_eq!(p, layout.premium_at(Position::new(14 - row, col)));
            }
        }
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(BoardLayout::from_rows(&[]), Err(LayoutError::Empty));
        assert!(matches!(
            BoardLayout::from_rows(&["...", "..", "..."]),
            Err(LayoutError::NotSquare { row: 1, .. })
        ));
        assert!(matches!(
            BoardLayout::from_rows(&["..", ".x"]),
            Err(LayoutError::UnknownSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn test_small_layout_center() {
        let layout = BoardLayout::from_rows(&["3..", ".*.", "..t"]).unwrap();
        assert_eq!(layout.center(), Position::new(1, 1));
        assert_eq!(layout.premium_at(Position::new(2, 2)).word_multiplier(), 3);
        assert_eq!(layout.premium_at(Position::new(0, 0)).letter_multiplier(), 3);
    }
}
