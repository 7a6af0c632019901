//! Word placement validation and per-word scoring.
//!
//! Tiles are laid in order into the empty cells starting at the origin,
//! stepping in the placement direction. Occupied cells met on the way are
//! skipped and their letters become part of the main word, so a single
//! placement can play through letters already on the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::geometry::{Direction, Position};
use super::grid::Board;
use crate::tiles::Tile;

/// Why a placement is geometrically illegal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement contains no tiles")]
    NoTiles,
    #[error("cell {0} is already occupied")]
    Overlap(Position),
    #[error("placement does not connect to any tile on the board")]
    Disconnected,
    #[error("placement runs off the board")]
    OutOfBounds,
    #[error("the first word must cover the centre square {0}")]
    FirstMoveMustCoverCenter(Position),
    #[error("placement does not form a word of two or more letters")]
    NoWordFormed,
    #[error("blank tile placed without a letter")]
    UnassignedBlank,
}

/// A tile and the cell it would occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub position: Position,
    pub tile: Tile,
}

/// A word created by a placement, with its multiplier-adjusted score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormedWord {
    pub word: String,
    pub direction: Direction,
    pub positions: Vec<Position>,
    pub score: i32,
}

/// Result of a legal placement. Nothing has been written to the board yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub placed: SmallVec<[PlacedTile; 7]>,
    /// Main word first (when it has two or more letters), then cross-words.
    pub words: Vec<FormedWord>,
}

impl PlacementOutcome {
    /// Sum of the word scores, before any bingo bonus.
    #[must_use]
    pub fn words_score(&self) -> i32 {
        self.words.iter().map(|w| w.score).sum()
    }

    pub fn word_strings(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.word.as_str())
    }
}

impl Board {
    /// Validate laying `tiles` from `origin` along `direction`.
    ///
    /// Returns every word formed along with its score. The board is not
    /// modified; call [`Board::commit`] to apply the outcome.
    pub fn place(
        &self,
        tiles: &[Tile],
        origin: Position,
        direction: Direction,
    ) -> Result<PlacementOutcome, PlacementError> {
        if tiles.is_empty() {
            return Err(PlacementError::NoTiles);
        }
        if tiles.iter().any(Tile::is_unassigned_blank) {
            return Err(PlacementError::UnassignedBlank);
        }
        if !self.in_bounds(origin) {
            return Err(PlacementError::OutOfBounds);
        }
        if self.is_occupied(origin) {
            return Err(PlacementError::Overlap(origin));
        }

        let placed = self.lay_out(tiles, origin, direction)?;

        if self.is_empty() {
            if !placed.iter().any(|p| p.position == self.center()) {
                return Err(PlacementError::FirstMoveMustCoverCenter(self.center()));
            }
        } else if !placed
            .iter()
            .any(|p| p.position.neighbors(self.size()).any(|n| self.is_occupied(n)))
        {
            return Err(PlacementError::Disconnected);
        }

        let mut words = Vec::new();
        if let Some(main) = self.word_through(&placed, placed[0].position, direction) {
            words.push(main);
        }
        for p in &placed {
            if let Some(cross) = self.word_through(&placed, p.position, direction.perpendicular()) {
                words.push(cross);
            }
        }

        if words.is_empty() {
            return Err(PlacementError::NoWordFormed);
        }

        Ok(PlacementOutcome { placed, words })
    }

    /// Write an accepted placement onto the board.
    pub fn commit(&mut self, outcome: &PlacementOutcome) {
        for p in &outcome.placed {
            self.set_tile(p.position, p.tile);
        }
    }

    /// Assign each tile to the next empty cell along the line.
    fn lay_out(
        &self,
        tiles: &[Tile],
        origin: Position,
        direction: Direction,
    ) -> Result<SmallVec<[PlacedTile; 7]>, PlacementError> {
        let mut placed = SmallVec::new();
        let mut cursor = Some(origin);

        for &tile in tiles {
            let position = loop {
                match cursor {
                    None => return Err(PlacementError::OutOfBounds),
                    Some(p) if self.is_occupied(p) => cursor = p.forward(direction, self.size()),
                    Some(p) => break p,
                }
            };
            placed.push(PlacedTile { position, tile });
            cursor = position.forward(direction, self.size());
        }

        Ok(placed)
    }

    /// The word running through `start` along `direction`, treating the
    /// placed tiles as if they were on the board. `None` for single letters.
    fn word_through(
        &self,
        placed: &[PlacedTile],
        start: Position,
        direction: Direction,
    ) -> Option<FormedWord> {
        let tile_at = |pos: Position| {
            placed
                .iter()
                .find(|p| p.position == pos)
                .map(|p| (p.tile, true))
                .or_else(|| self.tile_at(pos).map(|t| (t, false)))
        };

        let mut first = start;
        while let Some(prev) = first.backward(direction) {
            if tile_at(prev).is_none() {
                break;
            }
            first = prev;
        }

        let mut word = String::new();
        let mut positions = Vec::new();
        let mut letter_total = 0;
        let mut word_multiplier = 1;
        let mut cursor = Some(first);

        while let Some(pos) = cursor {
            let Some((tile, is_new)) = tile_at(pos) else {
                break;
            };
            let points = i32::from(tile.points);
            if is_new {
                let premium = self.cell(pos).map(|c| c.premium).unwrap_or_default();
                letter_total += points * premium.letter_multiplier();
                word_multiplier *= premium.word_multiplier();
            } else {
                letter_total += points;
            }
            word.push(tile.letter);
            positions.push(pos);
            cursor = pos.forward(direction, self.size());
        }

        (positions.len() > 1).then(|| FormedWord {
            word,
            direction,
            positions,
            score: letter_total * word_multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;

    fn tiles(word: &str) -> Vec<Tile> {
        word.chars().map(|c| Tile::new(c, 1)).collect()
    }

    fn board_after(plays: &[(&str, Position, Direction)]) -> Board {
        let mut board = Board::new(&BoardLayout::standard());
        for (word, origin, direction) in plays {
            let outcome = board.place(&tiles(word), *origin, *direction).unwrap();
            board.commit(&outcome);
        }
        board
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let board = Board::new(&BoardLayout::standard());
        let result = board.place(&tiles("CAT"), Position::new(0, 0), Direction::Horizontal);
        assert_eq!(result, Err(PlacementError::FirstMoveMustCoverCenter(Position::new(7, 7))));
    }

    #[test]
    fn test_first_move_scores_center_double_word() {
        let board = Board::new(&BoardLayout::standard());
        let cat = [Tile::new('C', 3), Tile::new('A', 1), Tile::new('T', 1)];

        let outcome = board.place(&cat, Position::new(7, 6), Direction::Horizontal).unwrap();

        assert_eq!(outcome.words.len(), 1);
        assert_eq!(outcome.words[0].word, "CAT");
        assert_eq!(outcome.words[0].score, 10);
        assert!(board.is_empty(), "place must not modify the board");
    }

    #[test]
    fn test_single_tile_first_move_forms_no_word() {
        let board = Board::new(&BoardLayout::standard());
        let result = board.place(&tiles("A"), Position::new(7, 7), Direction::Horizontal);
        assert_eq!(result, Err(PlacementError::NoWordFormed));
    }

    #[test]
    fn test_overlap_and_out_of_bounds() {
        let board = board_after(&[("CAT", Position::new(7, 6), Direction::Horizontal)]);

        assert_eq!(
            board.place(&tiles("S"), Position::new(7, 7), Direction::Vertical),
            Err(PlacementError::Overlap(Position::new(7, 7)))
        );
        assert_eq!(
            board.place(&tiles("ABCDEF"), Position::new(7, 10), Direction::Horizontal),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            board.place(&tiles("AB"), Position::new(15, 0), Direction::Horizontal),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn test_disconnected() {
        let board = board_after(&[("CAT", Position::new(7, 6), Direction::Horizontal)]);
        assert_eq!(
            board.place(&tiles("DOG"), Position::new(0, 0), Direction::Horizontal),
            Err(PlacementError::Disconnected)
        );
    }

    #[test]
    fn test_extending_a_word_includes_existing_letters() {
        let board = board_after(&[("CAT", Position::new(7, 6), Direction::Horizontal)]);

        let outcome = board.place(&tiles("S"), Position::new(7, 9), Direction::Horizontal).unwrap();

        assert_eq!(outcome.words.len(), 1);
        assert_eq!(outcome.words[0].word, "CATS");
        // Centre premium was used by the first move and does not count again.
        assert_eq!(outcome.words[0].score, 4);
    }

    #[test]
    fn test_playing_through_an_existing_letter() {
        let board = board_after(&[("CAT", Position::new(7, 6), Direction::Horizontal)]);

        // Lay O, T around the A at (7, 7) vertically: O at (6, 7), T at (8, 7).
        let outcome = board.place(&tiles("OT"), Position::new(6, 7), Direction::Vertical).unwrap();

        assert_eq!(outcome.placed[0].position, Position::new(6, 7));
        assert_eq!(outcome.placed[1].position, Position::new(8, 7));
        assert_eq!(outcome.words[0].word, "OAT");
    }

    #[test]
    fn test_cross_words_are_reported() {
        let board = board_after(&[("CAT", Position::new(7, 6), Direction::Horizontal)]);

        // "AT" under "CA": A below C forms CA, T below A forms AT.
        let outcome = board.place(&tiles("AT"), Position::new(8, 6), Direction::Horizontal).unwrap();
        let words: Vec<_> = outcome.word_strings().collect();

        assert_eq!(words, vec!["AT", "CA", "AT"]);
    }

    #[test]
    fn test_premiums_apply_only_to_new_tiles() {
        let board = Board::new(&BoardLayout::standard());
        // QUITS from (7, 3): Q sits on a double letter, S on the centre.
        let word = [
            Tile::new('Q', 10),
            Tile::new('U', 1),
            Tile::new('I', 1),
            Tile::new('T', 1),
            Tile::new('S', 1),
        ];
        let outcome = board.place(&word, Position::new(7, 3), Direction::Horizontal).unwrap();

        // (10 * 2 + 1 + 1 + 1 + 1) * 2
        assert_eq!(outcome.words_score(), 48);
    }

    #[test]
    fn test_blank_must_be_assigned_and_scores_zero() {
        let board = Board::new(&BoardLayout::standard());

        let unassigned = [Tile::blank(), Tile::new('T', 1)];
        assert_eq!(
            board.place(&unassigned, Position::new(7, 7), Direction::Horizontal),
            Err(PlacementError::UnassignedBlank)
        );

        let assigned = [Tile::blank().assign('A'), Tile::new('T', 1)];
        let outcome = board.place(&assigned, Position::new(7, 7), Direction::Horizontal).unwrap();
        assert_eq!(outcome.words[0].word, "AT");
        assert_eq!(outcome.words[0].score, 2);
    }

    #[test]
    fn test_no_tiles() {
        let board = Board::new(&BoardLayout::standard());
        assert_eq!(
            board.place(&[], Position::new(7, 7), Direction::Horizontal),
            Err(PlacementError::NoTiles)
        );
    }
}
