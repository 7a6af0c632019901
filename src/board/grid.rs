//! Board cells.
//!
//! Cells live in a persistent `im::Vector`, so cloning a board for a new
//! game snapshot is O(1) and only the cells a move touches are copied.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Position};
use super::layout::{BoardLayout, Premium};
use crate::tiles::Tile;

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    /// Once set, never cleared.
    pub tile: Option<Tile>,
    pub premium: Premium,
}

/// Fixed-size square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    center: Position,
    cells: Vector<Cell>,
    tile_count: usize,
}

impl Board {
    /// An empty board with premiums taken from `layout`.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        let size = layout.size();
        let cells = (0..size * size)
            .map(|i| {
                let position = Position::new(i / size, i % size);
                Cell {
                    position,
                    tile: None,
                    premium: layout.premium_at(position),
                }
            })
            .collect();

        Self {
            size,
            center: layout.center(),
            cells,
            tile_count: 0,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn center(&self) -> Position {
        self.center
    }

    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if self.in_bounds(pos) {
            self.cells.get(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.cell(pos).and_then(|c| c.tile)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.tile_at(pos).is_some()
    }

    /// True until the first word is played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile_count == 0
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Empty cell next to at least one placed tile.
    #[must_use]
    pub fn is_anchor(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && !self.is_occupied(pos)
            && pos.neighbors(self.size).any(|n| self.is_occupied(n))
    }

    /// Letters of the run of occupied cells ending just before `pos`.
    #[must_use]
    pub fn letters_before(&self, pos: Position, direction: Direction) -> String {
        let mut letters = Vec::new();
        let mut cursor = pos.backward(direction);
        while let Some(p) = cursor {
            match self.tile_at(p) {
                Some(tile) => letters.push(tile.letter),
                None => break,
            }
            cursor = p.backward(direction);
        }
        letters.iter().rev().collect()
    }

    /// Letters of the run of occupied cells starting just after `pos`.
    #[must_use]
    pub fn letters_after(&self, pos: Position, direction: Direction) -> String {
        let mut letters = String::new();
        let mut cursor = pos.forward(direction, self.size);
        while let Some(p) = cursor {
            match self.tile_at(p) {
                Some(tile) => letters.push(tile.letter),
                None => break,
            }
            cursor = p.forward(direction, self.size);
        }
        letters
    }

    /// Write a tile into an empty cell. Placement is permanent.
    pub(crate) fn set_tile(&mut self, pos: Position, tile: Tile) {
        assert!(self.in_bounds(pos), "tile written outside the board at {pos}");
        let index = pos.row * self.size + pos.col;
        let cell = &mut self.cells[index];
        assert!(cell.tile.is_none(), "cell {pos} is already occupied");
        cell.tile = Some(tile);
        self.tile_count += 1;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                match self.tile_at(pos) {
                    Some(tile) => write!(f, "{tile}")?,
                    None if pos == self.center => write!(f, "*")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
